//! Onyx: a single column under a name and contact header.

use crate::parts::{
    Contact, TEXT_XS, description, education_entry, icon_contact, page, reference_entry, side_by_side,
    titled_entry, work_entry,
};
use vitae_idf::RenderNode;
use vitae_model::SectionKey;
use vitae_style::{AlignItems, Dimension, FlexDirection, FontWeight, Margins, TextTransform};
use vitae_template_core::{ObjectiveComposer, RenderContext, SectionComposer, Template, TemplateError};
use vitae_template_dsl::builders::*;
use vitae_template_dsl::{TemplateBuilder, pill, subtitle, wrap_row};

pub const KEY: &str = "onyx";

const CONTACTS: [Contact; 6] =
    [Contact::Address, Contact::Phone, Contact::Website, Contact::Email, Contact::Github, Contact::Linkedin];

#[derive(Debug, Clone, Copy, Default)]
pub struct Onyx;

impl Template for Onyx {
    fn render(&self, ctx: &RenderContext<'_>) -> Result<RenderNode, TemplateError> {
        let s = ctx.sections();
        let heading = |title: &str| section_heading(ctx, title);

        let main = Region::new()
            .id("main")
            .maybe_child(ObjectiveComposer::new(s.objective.as_ref()).heading(heading).compose(|body| description(ctx, body)))
            .maybe_child(
                SectionComposer::new(SectionKey::Work, s.work.as_ref())
                    .heading(heading)
                    .compose(|item| work_entry(ctx, item).into_node()),
            )
            .maybe_child(
                SectionComposer::new(SectionKey::Education, s.education.as_ref())
                    .heading(heading)
                    .compose(|item| education_entry(ctx, item, None).into_node()),
            )
            .maybe_child(side_by_side(
                2,
                [
                    SectionComposer::new(SectionKey::Awards, s.awards.as_ref())
                        .heading(heading)
                        .compose(|item| titled_entry(ctx, &item.title, &item.subtitle, &item.description).into_node()),
                    SectionComposer::new(SectionKey::Certifications, s.certifications.as_ref())
                        .heading(heading)
                        .compose(|item| titled_entry(ctx, &item.title, &item.subtitle, &item.description).into_node()),
                ],
            ))
            .maybe_child(
                SectionComposer::new(SectionKey::Skills, s.skills.as_ref())
                    .heading(heading)
                    .items_in(|items| wrap_row(6.0).margin(Margins::top(4.0)).children(items).into_node())
                    .compose(|item| {
                        pill(&item.skill, ctx.palette.primary.clone(), ctx.palette.background.clone())
                            .border_radius(12.0)
                            .into_node()
                    }),
            )
            .maybe_child(
                SectionComposer::new(SectionKey::References, s.references.as_ref())
                    .heading(heading)
                    .items_in(|items| Grid::new(3).gap(18.0).children(items).into_node())
                    .compose(|item| reference_entry(ctx, item, TEXT_XS).into_node()),
            );

        Ok(page(ctx)
            .padding(Margins::all(30.0))
            .child(header(ctx))
            .child(Rule::new().margin(Margins::y(18.0)))
            .child(main)
            .into_node())
    }
}

fn header(ctx: &RenderContext<'_>) -> Region {
    let person = ctx.person();
    let accent = ctx.palette.accent.clone();

    let profile = Block::new()
        .width(Dimension::columns(3, 4))
        .child(Heading::new(1, person.full_name()).font_size(36.0).font_weight(FontWeight::Bold).color(accent.clone()))
        .child(subtitle(&person.subtitle).font_weight(FontWeight::Medium).opacity(1.0));

    let contacts = Block::new()
        .width(Dimension::columns(1, 4))
        .font_size(TEXT_XS)
        .children(CONTACTS.iter().filter_map(|c| icon_contact(*c, person, accent.clone())));

    Region::new().id("header").child(
        Flex::new()
            .flex_direction(FlexDirection::Row)
            .align_items(AlignItems::Center)
            .child(profile)
            .child(contacts),
    )
}

fn section_heading(ctx: &RenderContext<'_>, title: &str) -> RenderNode {
    Heading::new(2, title)
        .font_size(TEXT_XS)
        .font_weight(FontWeight::Bold)
        .text_transform(TextTransform::Uppercase)
        .color(ctx.palette.accent.clone())
        .margin(Margins { top: 18.0, bottom: 6.0, ..Default::default() })
        .into_node()
}
