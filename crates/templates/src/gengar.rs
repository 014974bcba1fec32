//! Gengar: a four-quadrant layout. The accent block holds the name and
//! contacts, the tinted blocks hold the objective and the supporting sections.

use crate::parts::{
    Contact, TEXT_SM, TEXT_XS, description, headline, page, paren_date_range, reference_entry, small_line, strong_line,
    title_with_location, titled_entry, work_entry,
};
use vitae_idf::RenderNode;
use vitae_model::{EducationItem, Person, SectionKey};
use vitae_style::{AlignItems, Dimension, FlexDirection, FontWeight, Margins, TextTransform};
use vitae_template_core::{ObjectiveComposer, Palette, RenderContext, SectionComposer, Template, TemplateError};
use vitae_template_dsl::builders::*;
use vitae_template_dsl::{TemplateBuilder, h1};

pub const KEY: &str = "gengar";

const CONTACTS: [Contact; 4] = [Contact::Phone, Contact::Email, Contact::Website, Contact::Address];

#[derive(Debug, Clone, Copy, Default)]
pub struct Gengar;

impl Template for Gengar {
    fn render(&self, ctx: &RenderContext<'_>) -> Result<RenderNode, TemplateError> {
        let s = ctx.sections();
        let palette = &ctx.palette;
        let heading = |title: &str| section_heading(title);

        let identity = Region::new()
            .id("identity")
            .width(Dimension::columns(4, 12))
            .padding(Margins::xy(18.0, 24.0))
            .background_color(palette.accent.clone())
            .color(palette.background.clone())
            .child(h1(&ctx.person().full_name()).font_size(20.0))
            .child(Paragraph::new(ctx.person().subtitle.as_str()).font_size(TEXT_XS).font_weight(FontWeight::Medium))
            .child(Rule::new().width(Dimension::Percent(25.0)).opacity(0.5).margin(Margins::y(14.0)))
            .children(CONTACTS.iter().filter_map(|c| contact_row(*c, ctx.person(), palette)));

        let summary = Region::new()
            .id("summary")
            .width(Dimension::columns(8, 12))
            .padding(Margins::xy(18.0, 24.0))
            .background_opt(palette.tint.clone())
            .maybe_child(
                ObjectiveComposer::new(s.objective.as_ref())
                    .heading(heading)
                    .compose(|body| description(ctx, body)),
            );

        let sidebar = Region::new()
            .id("sidebar")
            .width(Dimension::columns(4, 12))
            .padding(Margins::xy(18.0, 24.0))
            .background_opt(palette.tint.clone())
            .maybe_child(
                SectionComposer::new(SectionKey::Skills, s.skills.as_ref())
                    .heading(heading)
                    .items_in(|items| List::new().nodes(items).into_node())
                    .compose(|item| Paragraph::new(item.skill.as_str()).font_size(TEXT_SM).into_node()),
            )
            .maybe_child(
                SectionComposer::new(SectionKey::Education, s.education.as_ref())
                    .heading(heading)
                    .compose(|item| education(ctx, item)),
            )
            .maybe_child(
                SectionComposer::new(SectionKey::Certifications, s.certifications.as_ref())
                    .heading(heading)
                    .compose(|item| titled_entry(ctx, &item.title, &item.subtitle, &item.description).into_node()),
            );

        let main = Region::new()
            .id("main")
            .width(Dimension::columns(8, 12))
            .padding(Margins::xy(18.0, 24.0))
            .maybe_child(
                SectionComposer::new(SectionKey::Work, s.work.as_ref())
                    .heading(heading)
                    .compose(|item| work_entry(ctx, item).into_node()),
            )
            .maybe_child(
                SectionComposer::new(SectionKey::Awards, s.awards.as_ref())
                    .heading(heading)
                    .compose(|item| titled_entry(ctx, &item.title, &item.subtitle, &item.description).into_node()),
            )
            .maybe_child(
                SectionComposer::new(SectionKey::References, s.references.as_ref())
                    .heading(heading)
                    .items_in(|items| Grid::new(2).gap(18.0).children(items).into_node())
                    .compose(|item| reference_entry(ctx, item, TEXT_XS).into_node()),
            );

        Ok(page(ctx).child(row(identity, summary)).child(row(sidebar, main)).into_node())
    }
}

fn row(left: Region, right: Region) -> Flex {
    Flex::new().flex_direction(FlexDirection::Row).child(left).child(right)
}

/// Icon on a background-colored disc, then the linked value.
fn contact_row(contact: Contact, person: &Person, palette: &Palette) -> Option<RenderNode> {
    let entry = contact.entry(person)?;
    let disc = Block::new()
        .background_color(palette.background.clone())
        .border_radius(10.0)
        .padding(Margins::all(3.0))
        .child(Paragraph::new(Span::new().color(palette.accent.clone()).child(Icon::new(contact.icon()))).font_size(TEXT_XS));

    let value = Span::new().font_weight(FontWeight::Medium).text(&entry.value);
    let value = match entry.href {
        Some(href) => Paragraph::new(Hyperlink::new(&href).child(value)),
        None => Paragraph::new(value),
    };

    Some(
        Flex::new()
            .id(contact.id())
            .align_items(AlignItems::Center)
            .gap(6.0)
            .margin(Margins::bottom(8.0))
            .child(disc)
            .child(value.font_size(TEXT_SM))
            .into_node(),
    )
}

/// Dates sit next to the school name and only when both ends are known.
fn education(ctx: &RenderContext<'_>, item: &EducationItem) -> RenderNode {
    let mut name = Paragraph::new(title_with_location(&item.name, item.location.as_deref()))
        .font_weight(FontWeight::SemiBold);
    if !item.start.trim().is_empty() && !item.end.trim().is_empty() {
        let dates = Span::new().font_size(TEXT_XS).font_weight(FontWeight::Medium).text(&paren_date_range(&item.start, &item.end));
        name = name.text(" ").child(dates);
    }

    let grade = Block::new().child(strong_line(&item.grade).color(ctx.palette.accent.clone()));

    Block::new()
        .margin(Margins::bottom(8.0))
        .child(headline(Block::new().child(name).child(small_line(&item.major)), grade))
        .maybe_child(description(ctx, &item.description))
        .into_node()
}

fn section_heading(title: &str) -> RenderNode {
    Heading::new(2, title)
        .font_size(TEXT_XS)
        .font_weight(FontWeight::Bold)
        .text_transform(TextTransform::Uppercase)
        .letter_spacing(0.5)
        .margin(Margins::bottom(6.0))
        .into_node()
}
