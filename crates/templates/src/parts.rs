//! Layout pieces shared by several templates.

use itertools::Itertools;
use vitae_idf::RenderNode;
use vitae_model::{EducationItem, Person, ReferenceItem, WorkItem};
use vitae_style::{AlignItems, FlexDirection, FontWeight, JustifyContent, Margins, TextAlign};
use vitae_template_core::RenderContext;
use vitae_template_dsl::builders::*;
use vitae_template_dsl::{TemplateBuilder, caption, p};
use vitae_types::Color;

pub const TEXT_SM: f32 = 10.0;
pub const TEXT_XS: f32 = 8.5;
pub const TEXT_BASE: f32 = 11.5;

/// The document root carrying the theme font and colors.
pub fn page(ctx: &RenderContext<'_>) -> Root {
    let palette = &ctx.palette;
    Root::new()
        .font_family(&palette.font_family)
        .background_color(palette.background.clone())
        .color(palette.primary.clone())
}

/// One row of contact information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    Address,
    Phone,
    Website,
    Email,
    Github,
    Linkedin,
}

/// What a contact row shows and where it links to.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactEntry {
    pub value: String,
    pub href: Option<String>,
}

impl Contact {
    pub fn id(self) -> &'static str {
        match self {
            Contact::Address => "contact-address",
            Contact::Phone => "contact-phone",
            Contact::Website => "contact-website",
            Contact::Email => "contact-email",
            Contact::Github => "contact-github",
            Contact::Linkedin => "contact-linkedin",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Contact::Address => "location_on",
            Contact::Phone => "phone",
            Contact::Website => "language",
            Contact::Email => "email",
            Contact::Github => "github",
            Contact::Linkedin => "linkedin",
        }
    }

    /// The row for this contact, or `None` when the field is empty.
    pub fn entry(self, person: &Person) -> Option<ContactEntry> {
        let raw = match self {
            Contact::Address => person.address.line3.as_str(),
            Contact::Phone => person.phone.as_str(),
            Contact::Website => person.website.as_str(),
            Contact::Email => person.email.as_str(),
            Contact::Github => person.social.github.as_deref().unwrap_or_default(),
            Contact::Linkedin => person.social.linkedin.as_deref().unwrap_or_default(),
        }
        .trim();
        if raw.is_empty() {
            return None;
        }

        let entry = match self {
            Contact::Address => ContactEntry { value: raw.to_string(), href: None },
            Contact::Phone => ContactEntry { value: raw.to_string(), href: Some(format!("tel:{raw}")) },
            Contact::Email => ContactEntry { value: raw.to_string(), href: Some(format!("mailto:{raw}")) },
            Contact::Website => ContactEntry { value: raw.to_string(), href: Some(website_href(raw)) },
            Contact::Github | Contact::Linkedin => {
                ContactEntry { value: format_display_url(raw), href: Some(raw.to_string()) }
            }
        };
        Some(entry)
    }
}

fn website_href(website: &str) -> String {
    if website.starts_with("http://") || website.starts_with("https://") {
        website.to_string()
    } else {
        format!("http://{website}")
    }
}

/// Shortens a profile URL for display.
///
/// `https://www.github.com/user/` becomes `github.com/user`.
pub fn format_display_url(url: &str) -> String {
    url.split('/')
        .filter(|segment| !segment.is_empty() && *segment != "http:" && *segment != "https:")
        .map(|segment| segment.replacen("www.", "", 1))
        .join("/")
}

/// An icon followed by the (linked) value, as used in header contact columns.
pub fn icon_contact(contact: Contact, person: &Person, icon_color: Color) -> Option<RenderNode> {
    let entry = contact.entry(person)?;
    let icon = Span::new().color(icon_color).font_size(TEXT_BASE).child(Icon::new(contact.icon()));
    let value = Span::new().font_weight(FontWeight::Medium).text(&entry.value);

    let line = match entry.href {
        Some(href) => Paragraph::new(icon).text(" ").child(Hyperlink::new(&href).child(value)),
        None => Paragraph::new(icon).text(" ").child(value),
    };

    Some(
        Flex::new()
            .id(contact.id())
            .align_items(AlignItems::Center)
            .margin(Margins::y(3.0))
            .child(line)
            .into_node(),
    )
}

/// A small bold label above the plain value, as used in sidebar contact blocks.
pub fn labeled_contact(contact: Contact, label: &str, person: &Person) -> Option<RenderNode> {
    let entry = contact.entry(person)?;
    Some(
        Block::new()
            .id(contact.id())
            .margin(Margins::y(4.0))
            .child(caption(label).font_weight(FontWeight::Bold))
            .child(p(&entry.value))
            .into_node(),
    )
}

/// The full postal address block. Absent when every line is blank.
pub fn address_block(person: &Person, label: &str) -> Option<RenderNode> {
    let lines = person.address.lines();
    if lines.is_empty() {
        return None;
    }
    Some(
        Block::new()
            .id(Contact::Address.id())
            .margin(Margins::y(4.0))
            .child(caption(label).font_weight(FontWeight::Bold))
            .children(lines.into_iter().map(p))
            .into_node(),
    )
}

pub fn title_with_location(title: &str, location: Option<&str>) -> String {
    match location.map(str::trim).filter(|l| !l.is_empty()) {
        Some(location) => format!("{title}, {location}"),
        None => title.to_string(),
    }
}

pub fn date_range(start: &str, end: &str) -> String {
    format!("{start} - {end}")
}

/// `(start - end)`, the way most headlines show dates.
pub fn paren_date_range(start: &str, end: &str) -> String {
    format!("({})", date_range(start, end))
}

/// Free text below an item headline. Absent for blank text.
pub fn description(ctx: &RenderContext<'_>, text: &str) -> Option<RenderNode> {
    let mut node = ctx.markdown(text)?;
    let style = &mut node.meta_mut().style;
    style.font_size = Some(TEXT_SM);
    style.margin = Some(Margins::top(4.0));
    Some(node)
}

/// A headline split into a left column and a right-aligned column.
pub fn headline(left: Block, right: Block) -> Flex {
    Flex::new()
        .flex_direction(FlexDirection::Row)
        .justify_content(JustifyContent::SpaceBetween)
        .align_items(AlignItems::Center)
        .child(left)
        .child(right.text_align(TextAlign::Right))
}

pub fn strong_line(text: &str) -> Paragraph {
    Paragraph::new(text).font_weight(FontWeight::SemiBold).font_size(TEXT_BASE)
}

pub fn small_line(text: &str) -> Paragraph {
    Paragraph::new(text).font_size(TEXT_XS)
}

/// The common work layout: title and role on the left, dates on the right.
pub fn work_entry(ctx: &RenderContext<'_>, item: &WorkItem) -> Block {
    let left = Block::new()
        .child(strong_line(&title_with_location(&item.title, item.location.as_deref())))
        .child(small_line(&item.role));
    let right = Block::new().child(small_line(&paren_date_range(&item.start, &item.end)).font_weight(FontWeight::Medium));

    Block::new()
        .margin(Margins::top(8.0))
        .child(headline(left, right))
        .maybe_child(description(ctx, &item.description))
}

/// The common education layout: school and major on the left, grade and
/// dates on the right. `grade_color` highlights the grade when set.
pub fn education_entry(ctx: &RenderContext<'_>, item: &EducationItem, grade_color: Option<Color>) -> Block {
    let left = Block::new()
        .child(strong_line(&title_with_location(&item.name, item.location.as_deref())))
        .child(small_line(&item.major));

    let mut grade = Paragraph::new(item.grade.as_str()).font_size(TEXT_SM).font_weight(FontWeight::Bold);
    if let Some(color) = grade_color {
        grade = grade.color(color);
    }
    let right = Block::new()
        .child(grade)
        .child(small_line(&paren_date_range(&item.start, &item.end)).font_weight(FontWeight::Medium));

    Block::new()
        .margin(Margins::top(8.0))
        .child(headline(left, right))
        .maybe_child(description(ctx, &item.description))
}

/// Places the present sections next to each other. Absent when none are.
pub fn side_by_side(columns: u8, sections: impl IntoIterator<Item = Option<RenderNode>>) -> Option<RenderNode> {
    let present: Vec<RenderNode> = sections.into_iter().flatten().collect();
    if present.is_empty() {
        return None;
    }
    Some(Grid::new(columns).gap(18.0).children(present).into_node())
}

/// Title, subtitle and description: the layout of awards and certifications.
pub fn titled_entry(ctx: &RenderContext<'_>, title: &str, subtitle: &str, text: &str) -> Block {
    Block::new()
        .margin(Margins::top(6.0))
        .child(strong_line(title))
        .child(small_line(subtitle))
        .maybe_child(description(ctx, text))
}

/// Name, position, phone, email and description of a referee.
pub fn reference_entry(ctx: &RenderContext<'_>, item: &ReferenceItem, detail_size: f32) -> Flex {
    let detail = |text: &str| Paragraph::new(text).font_size(detail_size);
    Flex::new()
        .flex_direction(FlexDirection::Column)
        .child(Paragraph::new(item.name.as_str()).font_size(TEXT_SM).font_weight(FontWeight::Medium))
        .child(detail(&item.position))
        .child(detail(&item.phone))
        .child(detail(&item.email))
        .maybe_child(description(ctx, &item.description))
}
