//! Castform: an accent sidebar with banded headings, and a main column whose
//! headings are ruled above and below.

use crate::parts::{
    Contact, TEXT_SM, TEXT_XS, address_block, description, education_entry, labeled_contact, page,
    reference_entry, titled_entry, work_entry,
};
use vitae_idf::RenderNode;
use vitae_model::SectionKey;
use vitae_style::{Border, Dimension, FlexDirection, FontWeight, ListStyleType, Margins};
use vitae_template_core::{ObjectiveComposer, RenderContext, SectionComposer, Template, TemplateError};
use vitae_template_dsl::builders::*;
use vitae_template_dsl::{TemplateBuilder, h2};
use vitae_types::Color;

pub const KEY: &str = "castform";

const BAND: Color = Color { r: 0, g: 0, b: 0, a: 0.25 };
const RULE_GRAY: Color = Color { r: 0xcb, g: 0xd5, b: 0xe0, a: 1.0 };

#[derive(Debug, Clone, Copy, Default)]
pub struct Castform;

impl Template for Castform {
    fn render(&self, ctx: &RenderContext<'_>) -> Result<RenderNode, TemplateError> {
        let s = ctx.sections();
        let person = ctx.person();

        let profile = Block::new()
            .padding(Margins { top: 18.0, left: 18.0, right: 18.0, bottom: 0.0 })
            .child(h2(&person.full_name()).font_size(20.0))
            .child(Paragraph::new(person.subtitle.as_str()).font_size(TEXT_SM));

        let contact = Block::new()
            .id("contact")
            .child(band_heading("Contact Information"))
            .child(
                Block::new()
                    .padding(Margins::x(18.0))
                    .maybe_child(address_block(person, "Address"))
                    .maybe_child(labeled_contact(Contact::Phone, "Phone", person))
                    .maybe_child(labeled_contact(Contact::Email, "Email Address", person))
                    .maybe_child(labeled_contact(Contact::Website, "Website", person)),
            );

        let sidebar = Region::new()
            .id("sidebar")
            .width(Dimension::columns(4, 12))
            .background_color(ctx.palette.accent.clone())
            .color(ctx.palette.background.clone())
            .child(profile)
            .child(contact)
            .maybe_child(
                SectionComposer::new(SectionKey::Skills, s.skills.as_ref())
                    .heading(band_heading)
                    .items_in(|items| {
                        List::new().list_style_type(ListStyleType::None).padding(Margins::x(18.0)).nodes(items).into_node()
                    })
                    .compose(|item| Paragraph::new(item.skill.as_str()).font_size(TEXT_SM).margin(Margins::y(4.0)).into_node()),
            )
            .maybe_child(
                SectionComposer::new(SectionKey::Certifications, s.certifications.as_ref())
                    .heading(band_heading)
                    .compose(|item| {
                        titled_entry(ctx, &item.title, &item.subtitle, &item.description).padding(Margins::x(18.0)).into_node()
                    }),
            );

        let main = Region::new()
            .id("main")
            .width(Dimension::columns(8, 12))
            .maybe_child(
                ObjectiveComposer::new(s.objective.as_ref())
                    .style(vitae_style::ElementStyle { margin: Some(Margins::all(18.0)), ..Default::default() })
                    .compose(|body| description(ctx, body)),
            )
            .maybe_child(
                SectionComposer::new(SectionKey::Work, s.work.as_ref())
                    .heading(light_heading)
                    .compose(|item| work_entry(ctx, item).padding(Margins::x(18.0)).into_node()),
            )
            .maybe_child(
                SectionComposer::new(SectionKey::Education, s.education.as_ref())
                    .heading(light_heading)
                    .compose(|item| education_entry(ctx, item, None).padding(Margins::x(18.0)).into_node()),
            )
            .maybe_child(
                SectionComposer::new(SectionKey::Awards, s.awards.as_ref())
                    .heading(light_heading)
                    .compose(|item| {
                        titled_entry(ctx, &item.title, &item.subtitle, &item.description).padding(Margins::x(18.0)).into_node()
                    }),
            )
            .maybe_child(
                SectionComposer::new(SectionKey::References, s.references.as_ref())
                    .heading(light_heading)
                    .items_in(|items| Grid::new(2).gap(18.0).padding(Margins::x(18.0)).children(items).into_node())
                    .compose(|item| reference_entry(ctx, item, TEXT_XS).into_node()),
            );

        Ok(page(ctx)
            .child(Flex::new().flex_direction(FlexDirection::Row).child(sidebar).child(main))
            .into_node())
    }
}

/// Sidebar heading on a translucent dark band.
fn band_heading(title: &str) -> RenderNode {
    Heading::new(2, title)
        .font_weight(FontWeight::SemiBold)
        .background_color(BAND)
        .padding(Margins { top: 6.0, bottom: 6.0, left: 18.0, right: 0.0 })
        .margin(Margins::y(12.0))
        .into_node()
}

/// Main column heading between two thin rules.
fn light_heading(title: &str) -> RenderNode {
    Heading::new(2, title)
        .font_weight(FontWeight::SemiBold)
        .border_top(Border::solid(1.0, RULE_GRAY))
        .border_bottom(Border::solid(1.0, RULE_GRAY))
        .padding(Margins::y(6.0))
        .margin(Margins { top: 12.0, bottom: 12.0, left: 18.0, right: 18.0 })
        .into_node()
}
