//! Celebi: a dark full-width header band over a tinted sidebar and a main column.

use crate::parts::{
    Contact, TEXT_SM, address_block, date_range, description, labeled_contact, page, reference_entry, small_line,
    strong_line, title_with_location, titled_entry,
};
use vitae_idf::RenderNode;
use vitae_model::{EducationItem, SectionKey, WorkItem};
use vitae_style::{
    AlignItems, Border, Dimension, FlexDirection, FontWeight, JustifyContent, ListStyleType, Margins, TextAlign,
    TextTransform,
};
use vitae_template_core::{ObjectiveComposer, RenderContext, SectionComposer, Template, TemplateError};
use vitae_template_dsl::builders::*;
use vitae_template_dsl::{TemplateBuilder, column};
use vitae_types::Color;

pub const KEY: &str = "celebi";

const BAND: Color = Color { r: 0x22, g: 0x22, b: 0x22, a: 1.0 };
const HEADING_RULE: Color = Color { r: 0x2d, g: 0x37, b: 0x48, a: 1.0 };

#[derive(Debug, Clone, Copy, Default)]
pub struct Celebi;

impl Template for Celebi {
    fn render(&self, ctx: &RenderContext<'_>) -> Result<RenderNode, TemplateError> {
        let s = ctx.sections();
        let person = ctx.person();

        let band = Region::new()
            .id("header")
            .background_color(BAND)
            .color(Color::WHITE)
            .min_height(Dimension::Pt(120.0))
            .text_align(TextAlign::Center)
            .child(
                column(4.0)
                    .justify_content(JustifyContent::Center)
                    .align_items(AlignItems::Center)
                    .padding(Margins::y(30.0))
                    .child(
                        Heading::new(1, person.full_name())
                            .font_size(33.0)
                            .font_weight(FontWeight::SemiBold)
                            .text_transform(TextTransform::Uppercase)
                            .letter_spacing(1.0),
                    )
                    .child(
                        Paragraph::new(person.subtitle.as_str())
                            .font_size(13.0)
                            .text_transform(TextTransform::Uppercase)
                            .letter_spacing(1.5),
                    ),
            );

        let contact = Block::new()
            .id("contact")
            .margin(Margins::bottom(18.0))
            .child(section_heading("Contact"))
            .maybe_child(address_block(person, "Address"))
            .maybe_child(labeled_contact(Contact::Phone, "Phone", person))
            .maybe_child(labeled_contact(Contact::Email, "Email Address", person))
            .maybe_child(labeled_contact(Contact::Website, "Website", person));

        let sidebar = Region::new()
            .id("sidebar")
            .width(Dimension::columns(4, 12))
            .padding(Margins::xy(18.0, 24.0))
            .text_align(TextAlign::Center)
            .background_opt(ctx.palette.tint.clone())
            .child(contact)
            .maybe_child(
                SectionComposer::new(SectionKey::Skills, s.skills.as_ref())
                    .heading(section_heading)
                    .items_in(|items| List::new().list_style_type(ListStyleType::None).nodes(items).into_node())
                    .compose(|item| Paragraph::new(item.skill.as_str()).font_size(TEXT_SM).margin(Margins::y(4.0)).into_node()),
            )
            .maybe_child(
                SectionComposer::new(SectionKey::Certifications, s.certifications.as_ref())
                    .heading(section_heading)
                    .compose(|item| titled_entry(ctx, &item.title, &item.subtitle, &item.description).into_node()),
            );

        let main = Region::new()
            .id("main")
            .width(Dimension::columns(8, 12))
            .padding(Margins { top: 12.0, left: 20.0, right: 30.0, bottom: 12.0 })
            .maybe_child(
                ObjectiveComposer::new(s.objective.as_ref())
                    .heading(section_heading)
                    .compose(|body| description(ctx, body)),
            )
            .maybe_child(
                SectionComposer::new(SectionKey::Work, s.work.as_ref())
                    .heading(section_heading)
                    .compose(|item| work(ctx, item)),
            )
            .maybe_child(
                SectionComposer::new(SectionKey::Education, s.education.as_ref())
                    .heading(section_heading)
                    .compose(|item| education(ctx, item)),
            )
            .maybe_child(
                SectionComposer::new(SectionKey::Awards, s.awards.as_ref())
                    .heading(section_heading)
                    .compose(|item| titled_entry(ctx, &item.title, &item.subtitle, &item.description).into_node()),
            )
            .maybe_child(
                SectionComposer::new(SectionKey::References, s.references.as_ref())
                    .heading(section_heading)
                    .items_in(|items| Grid::new(2).gap(12.0).children(items).into_node())
                    .compose(|item| reference_entry(ctx, item, TEXT_SM).into_node()),
            );

        Ok(page(ctx)
            .child(band)
            .child(Flex::new().flex_direction(FlexDirection::Row).child(sidebar).child(main))
            .into_node())
    }
}

fn work(ctx: &RenderContext<'_>, item: &WorkItem) -> RenderNode {
    let meta = format!(
        "{} | {}",
        title_with_location(&item.role, item.location.as_deref()),
        date_range(&item.start, &item.end)
    );
    Block::new()
        .margin(Margins::y(6.0))
        .child(strong_line(&item.title))
        .child(small_line(&meta))
        .maybe_child(description(ctx, &item.description))
        .into_node()
}

fn education(ctx: &RenderContext<'_>, item: &EducationItem) -> RenderNode {
    Block::new()
        .margin(Margins::y(6.0))
        .child(strong_line(&title_with_location(&item.name, item.location.as_deref())))
        .child(small_line(&item.major))
        .child(small_line(&date_range(&item.start, &item.end)))
        .maybe_child(description(ctx, &item.description))
        .into_node()
}

fn section_heading(title: &str) -> RenderNode {
    Heading::new(2, title)
        .font_size(12.0)
        .font_weight(FontWeight::SemiBold)
        .text_transform(TextTransform::Uppercase)
        .letter_spacing(1.0)
        .border_bottom(Border::solid(2.0, HEADING_RULE))
        .padding(Margins::bottom(3.0))
        .margin(Margins::y(6.0))
        .into_node()
}
