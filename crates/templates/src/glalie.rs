//! Glalie: a tinted, centered sidebar with a bordered contact card, and a
//! main column that lays education and skills out in two columns.

use crate::parts::{
    Contact, TEXT_SM, TEXT_XS, date_range, description, page, reference_entry, small_line, strong_line,
    titled_entry,
};
use vitae_idf::RenderNode;
use vitae_model::{Person, SectionKey, WorkItem};
use vitae_style::{Border, Dimension, FlexDirection, FontWeight, Margins, TextAlign, TextTransform};
use vitae_template_core::{ObjectiveComposer, RenderContext, SectionComposer, Template, TemplateError};
use vitae_template_dsl::builders::*;
use vitae_template_dsl::{TemplateBuilder, column, p};
use vitae_types::Color;

pub const KEY: &str = "glalie";

#[derive(Debug, Clone, Copy, Default)]
pub struct Glalie;

impl Template for Glalie {
    fn render(&self, ctx: &RenderContext<'_>) -> Result<RenderNode, TemplateError> {
        let s = ctx.sections();
        let person = ctx.person();
        let accent = ctx.palette.accent.clone();
        let heading = |title: &str| section_heading(title, ctx.palette.accent.clone());

        let identity = column(4.0)
            .child(Heading::new(1, person.first_name.as_str()).child(LineBreak).child(person.last_name.as_str()).font_size(30.0).font_weight(FontWeight::Bold).line_height(1.0))
            .child(
                Paragraph::new(person.subtitle.as_str())
                    .font_size(TEXT_XS)
                    .font_weight(FontWeight::Medium)
                    .text_transform(TextTransform::Uppercase)
                    .letter_spacing(0.5),
            );

        let sidebar = Region::new()
            .id("sidebar")
            .width(Dimension::columns(4, 12))
            .min_height(Dimension::Pt(842.0))
            .padding(Margins::all(24.0))
            .text_align(TextAlign::Center)
            .background_opt(ctx.palette.tint.clone())
            .child(identity)
            .child(contact_card(person, &accent))
            .maybe_child(
                ObjectiveComposer::new(s.objective.as_ref())
                    .heading(heading)
                    .compose(|body| description(ctx, body)),
            )
            .maybe_child(
                SectionComposer::new(SectionKey::Certifications, s.certifications.as_ref())
                    .heading(heading)
                    .compose(|item| titled_entry(ctx, &item.title, &item.subtitle, &item.description).into_node()),
            );

        let main = Region::new()
            .id("main")
            .width(Dimension::columns(8, 12))
            .padding(Margins::all(24.0))
            .maybe_child(
                SectionComposer::new(SectionKey::Work, s.work.as_ref())
                    .heading(heading)
                    .compose(|item| work(ctx, item)),
            )
            .maybe_child(
                SectionComposer::new(SectionKey::Education, s.education.as_ref())
                    .heading(heading)
                    .items_in(|items| Grid::new(2).gap(12.0).children(items).into_node())
                    .compose(|item| {
                        Block::new()
                            .margin(Margins::top(8.0))
                            .child(strong_line(&item.name).font_size(TEXT_XS))
                            .child(small_line(&item.major).opacity(0.75))
                            .child(small_line(&date_range(&item.start, &item.end)).opacity(0.75))
                            .maybe_child(description(ctx, &item.description))
                            .into_node()
                    }),
            )
            .maybe_child(
                SectionComposer::new(SectionKey::Skills, s.skills.as_ref())
                    .heading(heading)
                    .items_in(|items| Grid::new(2).gap(8.0).padding(Margins::top(6.0)).children(items).into_node())
                    .compose(|item| small_line(&item.skill).font_weight(FontWeight::Medium).into_node()),
            )
            .maybe_child(
                SectionComposer::new(SectionKey::Awards, s.awards.as_ref())
                    .heading(heading)
                    .compose(|item| titled_entry(ctx, &item.title, &item.subtitle, &item.description).into_node()),
            )
            .maybe_child(
                SectionComposer::new(SectionKey::References, s.references.as_ref())
                    .heading(heading)
                    .items_in(|items| Grid::new(3).gap(24.0).children(items).into_node())
                    .compose(|item| reference_entry(ctx, item, TEXT_XS).into_node()),
            );

        Ok(page(ctx)
            .child(Flex::new().flex_direction(FlexDirection::Row).child(sidebar).child(main))
            .into_node())
    }
}

/// Phone, email and website under accent labels, then the address.
fn contact_card(person: &Person, accent: &Color) -> Block {
    let labeled = |contact: Contact, label: &str| {
        contact.entry(person).map(|entry| {
            Flex::new()
                .id(contact.id())
                .flex_direction(FlexDirection::Column)
                .child(Paragraph::new(label).font_size(TEXT_XS).font_weight(FontWeight::Bold).color(accent.clone()))
                .child(Paragraph::new(entry.value).font_size(TEXT_SM))
        })
    };

    let lines = person.address.lines();
    let address = (!lines.is_empty()).then(|| {
        Flex::new()
            .id(Contact::Address.id())
            .flex_direction(FlexDirection::Column)
            .child(Paragraph::new(Span::new().color(accent.clone()).child(Icon::new("home"))))
            .children(lines.into_iter().map(|line| p(line).font_size(TEXT_SM)))
    });

    Block::new()
        .id("contact")
        .border(Border::solid(2.0, accent.clone()))
        .padding(Margins::xy(16.0, 12.0))
        .margin(Margins::bottom(24.0))
        .child(Paragraph::new(Span::new().color(accent.clone()).child(Icon::new("flare"))))
        .child(
            column(12.0)
                .maybe_child(labeled(Contact::Phone, "Phone Number"))
                .maybe_child(labeled(Contact::Email, "Email Address"))
                .maybe_child(labeled(Contact::Website, "Website"))
                .maybe_child(address),
        )
}

fn work(ctx: &RenderContext<'_>, item: &WorkItem) -> RenderNode {
    let meta = format!("{} / {}", item.role, date_range(&item.start, &item.end));
    Block::new()
        .margin(Margins::top(8.0))
        .child(strong_line(&item.title).font_size(TEXT_SM))
        .child(small_line(&meta).opacity(0.75).font_weight(FontWeight::Medium))
        .maybe_child(description(ctx, &item.description))
        .into_node()
}

fn section_heading(title: &str, accent: Color) -> RenderNode {
    Heading::new(2, title)
        .font_size(TEXT_SM)
        .font_weight(FontWeight::SemiBold)
        .text_transform(TextTransform::Uppercase)
        .color(accent.clone())
        .border_bottom(Border::solid(1.0, accent))
        .padding(Margins::bottom(3.0))
        .margin(Margins { top: 12.0, bottom: 6.0, ..Default::default() })
        .into_node()
}
