//! Charizard: the Onyx arrangement with underlined headings and neutral skill
//! pills. Awards and certifications share a row only when both are shown.

use crate::parts::{
    Contact, TEXT_XS, description, education_entry, icon_contact, page, reference_entry, side_by_side,
    titled_entry, work_entry,
};
use vitae_idf::RenderNode;
use vitae_model::SectionKey;
use vitae_style::{AlignItems, Border, Dimension, FlexDirection, FontWeight, Margins, TextTransform};
use vitae_template_core::{ObjectiveComposer, RenderContext, SectionComposer, Template, TemplateError};
use vitae_template_dsl::builders::*;
use vitae_template_dsl::{TemplateBuilder, h1, pill, wrap_row};
use vitae_types::Color;

pub const KEY: &str = "charizard";

const CONTACTS: [Contact; 6] =
    [Contact::Address, Contact::Phone, Contact::Email, Contact::Website, Contact::Github, Contact::Linkedin];

const PILL_GRAY: Color = Color { r: 0xee, g: 0xee, b: 0xee, a: 1.0 };

#[derive(Debug, Clone, Copy, Default)]
pub struct Charizard;

impl Template for Charizard {
    fn render(&self, ctx: &RenderContext<'_>) -> Result<RenderNode, TemplateError> {
        let s = ctx.sections();
        let heading = |title: &str| section_heading(ctx, title);

        let paired = s.is_enabled(SectionKey::Awards) && s.is_enabled(SectionKey::Certifications);
        let awards = SectionComposer::new(SectionKey::Awards, s.awards.as_ref())
            .heading(heading)
            .compose(|item| titled_entry(ctx, &item.title, &item.subtitle, &item.description).into_node());
        let certifications = SectionComposer::new(SectionKey::Certifications, s.certifications.as_ref())
            .heading(heading)
            .compose(|item| titled_entry(ctx, &item.title, &item.subtitle, &item.description).into_node());

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
            .maybe_child(side_by_side(if paired { 2 } else { 1 }, [awards, certifications]))
            .maybe_child(
                SectionComposer::new(SectionKey::Skills, s.skills.as_ref())
                    .heading(heading)
                    .items_in(|items| wrap_row(6.0).children(items).into_node())
                    .compose(|item| {
                        pill(&item.skill, PILL_GRAY, ctx.palette.primary.clone()).border_radius(12.0).into_node()
                    }),
            )
            .maybe_child(
                SectionComposer::new(SectionKey::References, s.references.as_ref())
                    .heading(heading)
                    .items_in(|items| Grid::new(3).gap(18.0).children(items).into_node())
                    .compose(|item| reference_entry(ctx, item, TEXT_XS).into_node()),
            );

        Ok(page(ctx).padding(Margins::all(30.0)).child(header(ctx)).child(main).into_node())
    }
}

fn header(ctx: &RenderContext<'_>) -> Region {
    let person = ctx.person();
    let accent = ctx.palette.accent.clone();

    let name = format!("{} {}", person.first_name.trim(), person.last_name.trim());
    let profile = Block::new()
        .width(Dimension::columns(3, 4))
        .child(h1(name.trim()).font_size(30.0).color(accent.clone()))
        .child(Paragraph::new(person.subtitle.as_str()).font_size(10.0).font_weight(FontWeight::Medium));

    let contacts = Block::new()
        .width(Dimension::columns(1, 4))
        .font_size(TEXT_XS)
        .children(CONTACTS.iter().filter_map(|c| icon_contact(*c, person, accent.clone())));

    Region::new()
        .id("header")
        .child(Flex::new().flex_direction(FlexDirection::Row).align_items(AlignItems::Center).child(profile).child(contacts))
}

fn section_heading(ctx: &RenderContext<'_>, title: &str) -> RenderNode {
    let accent = ctx.palette.accent.clone();
    Heading::new(2, title)
        .font_size(TEXT_XS)
        .font_weight(FontWeight::Bold)
        .text_transform(TextTransform::Uppercase)
        .color(accent.clone())
        .border_bottom(Border::solid(1.0, accent))
        .margin(Margins { top: 18.0, bottom: 6.0, ..Default::default() })
        .into_node()
}
