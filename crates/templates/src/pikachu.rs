//! Pikachu: an accent header card with the objective, then a narrow sidebar
//! beside the main column.

use crate::parts::{
    Contact, TEXT_SM, TEXT_XS, description, education_entry, icon_contact, page, reference_entry, titled_entry,
    work_entry,
};
use vitae_idf::RenderNode;
use vitae_model::SectionKey;
use vitae_style::{Border, Dimension, FlexDirection, FontWeight, Margins, TextTransform};
use vitae_template_core::{ObjectiveComposer, RenderContext, SectionComposer, Template, TemplateError};
use vitae_template_dsl::builders::*;
use vitae_template_dsl::{TemplateBuilder, column, h1};
use vitae_types::Color;

pub const KEY: &str = "pikachu";

const CONTACTS: [Contact; 4] = [Contact::Phone, Contact::Website, Contact::Email, Contact::Address];

const SKILL_GRAY: Color = Color { r: 0xe2, g: 0xe8, b: 0xf0, a: 1.0 };

#[derive(Debug, Clone, Copy, Default)]
pub struct Pikachu;

impl Template for Pikachu {
    fn render(&self, ctx: &RenderContext<'_>) -> Result<RenderNode, TemplateError> {
        let s = ctx.sections();
        let heading = |title: &str| section_heading(ctx, title);

        let contacts = Block::new()
            .font_size(TEXT_SM)
            .margin(Margins::bottom(18.0))
            .children(CONTACTS.iter().filter_map(|c| icon_contact(*c, ctx.person(), ctx.palette.accent.clone())));

        let sidebar = Region::new()
            .id("sidebar")
            .width(Dimension::columns(4, 12))
            .child(contacts)
            .maybe_child(
                SectionComposer::new(SectionKey::Skills, s.skills.as_ref())
                    .heading(heading)
                    .items_in(|items| column(4.0).margin(Margins::bottom(18.0)).children(items).into_node())
                    .compose(|item| {
                        Block::new()
                            .background_color(SKILL_GRAY)
                            .border_radius(6.0)
                            .padding(Margins::xy(12.0, 8.0))
                            .child(Paragraph::new(item.skill.as_str()).font_size(TEXT_SM).font_weight(FontWeight::Medium))
                            .into_node()
                    }),
            )
            .maybe_child(
                SectionComposer::new(SectionKey::Certifications, s.certifications.as_ref())
                    .heading(heading)
                    .compose(|item| titled_entry(ctx, &item.title, &item.subtitle, &item.description).into_node()),
            );

        let main = Region::new()
            .id("main")
            .width(Dimension::columns(8, 12))
            .maybe_child(
                SectionComposer::new(SectionKey::Work, s.work.as_ref())
                    .heading(heading)
                    .compose(|item| work_entry(ctx, item).into_node()),
            )
            .maybe_child(
                SectionComposer::new(SectionKey::Education, s.education.as_ref())
                    .heading(heading)
                    .compose(|item| education_entry(ctx, item, Some(ctx.palette.accent.clone())).into_node()),
            )
            .maybe_child(
                SectionComposer::new(SectionKey::Awards, s.awards.as_ref())
                    .heading(heading)
                    .compose(|item| titled_entry(ctx, &item.title, &item.subtitle, &item.description).into_node()),
            )
            .maybe_child(
                SectionComposer::new(SectionKey::References, s.references.as_ref())
                    .heading(heading)
                    .items_in(|items| Grid::new(2).gap(6.0).children(items).into_node())
                    .compose(|item| reference_entry(ctx, item, TEXT_XS).into_node()),
            );

        Ok(page(ctx)
            .padding(Margins::all(30.0))
            .child(header(ctx))
            .child(Flex::new().flex_direction(FlexDirection::Row).gap(18.0).child(sidebar).child(main))
            .into_node())
    }
}

/// The accent card: name, subtitle, a faded rule and the objective body.
fn header(ctx: &RenderContext<'_>) -> Region {
    let person = ctx.person();
    let palette = &ctx.palette;

    let objective = ObjectiveComposer::new(ctx.sections().objective.as_ref())
        .compose(|body| ctx.markdown(body).map(|mut node| {
            node.meta_mut().style.font_size = Some(TEXT_SM);
            node
        }));

    Region::new()
        .id("header")
        .background_color(palette.accent.clone())
        .color(palette.background.clone())
        .border_radius(4.0)
        .padding(Margins::xy(24.0, 18.0))
        .margin(Margins::bottom(24.0))
        .child(h1(&person.full_name()).font_size(22.0))
        .child(Paragraph::new(person.subtitle.as_str()).font_size(TEXT_SM).font_weight(FontWeight::Medium).letter_spacing(0.5))
        .maybe_child(objective.map(|node| {
            Block::new()
                .child(Rule::new().opacity(0.5).margin(Margins::y(12.0)))
                .child(node)
                .into_node()
        }))
}

fn section_heading(ctx: &RenderContext<'_>, title: &str) -> RenderNode {
    let accent = ctx.palette.accent.clone();
    Heading::new(2, title)
        .font_size(TEXT_SM)
        .font_weight(FontWeight::Bold)
        .text_transform(TextTransform::Uppercase)
        .letter_spacing(0.5)
        .color(accent.clone())
        .border_bottom(Border::solid(2.0, accent))
        .margin(Margins::bottom(6.0))
        .into_node()
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitae_markdown::PlainTextRenderer;
    use vitae_model::{Objective, Resume, Theme};

    #[test]
    fn objective_lives_in_the_header_card() {
        let mut resume = Resume::default();
        resume.sections.objective =
            Some(Objective { enabled: true, heading: "Objective".into(), body: "Ship it.".into() });
        let theme = Theme::default();
        let ctx = RenderContext::new(&resume, &theme, &PlainTextRenderer);
        let tree = Pikachu.render(&ctx).unwrap();

        let header = tree.find_by_id("header").unwrap();
        assert_eq!(header.count_by_id("objective"), 1);
        assert!(header.text_content().contains("Ship it."));
        assert!(!tree.text_content().contains("Objective"));
    }
}
