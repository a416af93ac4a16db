//! Text and JSON reports of resolved theme attributes.

use serde::Serialize;
use themes::palette;
use themes::{
    Attr, AttributeTable, Capability, ColorBackend, ColorDepth, RenderContext, SliderGlyph, Slot,
    Style, ThemeEngine, ThemeRecord,
};

#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub theme: u32,
    pub name: Option<&'static str>,
    pub fallback: bool,
    pub capability: Capability,
    pub contexts: Vec<ContextReport<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ContextReport<'a> {
    pub context: RenderContext,
    pub window_id: u8,
    pub record: &'a ThemeRecord,
}

/// One-line-per-theme listing of the catalog.
pub fn theme_list() -> String {
    palette::themes()
        .map(|spec| {
            let mut notes = Vec::new();
            if spec.default_colors {
                notes.push("default colors");
            }
            if !spec.custom_colors.is_empty() {
                notes.push("custom palette");
            }
            if notes.is_empty() {
                format!("{:>2}  {}\n", spec.id.get(), spec.name)
            } else {
                format!("{:>2}  {} ({})\n", spec.id.get(), spec.name, notes.join(", "))
            }
        })
        .collect()
}

/// Renders the records of `contexts` as an aligned text report.
pub fn text_report<B: ColorBackend>(engine: &ThemeEngine<B>, contexts: &[RenderContext]) -> String {
    let table = engine.table();
    let mut out = heading(&table);
    out.push('\n');

    for &context in contexts {
        let record = engine.resolve(context);
        out.push_str(&format!("\n[{context}]\n"));

        for (field, attr) in record.assigned() {
            out.push_str(&field_line(&table, field.name(), attr));
        }

        if context == RenderContext::VerticalScrollbar {
            let glyph = glyph_name(record.scrollbar_slider_glyph);
            out.push_str(&format!("  {:<30} {glyph}\n", "slider glyph"));
            out.push_str(&format!("  {:<30} {}\n", "arrows", record.scrollbar_use_arrows));
        }
    }

    out
}

fn field_line(table: &AttributeTable, name: &str, attr: Attr) -> String {
    let colors = Slot::from_number(attr.pair)
        .and_then(|slot| table.pair(slot))
        .map(|pair| format!("{}/{}", pair.fg, pair.bg))
        .unwrap_or_else(|| "terminal default".to_string());

    format!(
        "  {:<30} pair {:>2}  {:<28} {}\n",
        name,
        attr.pair,
        colors,
        style_names(attr.style)
    )
}

/// Renders the records of `contexts` as pretty-printed JSON.
pub fn json_report<B: ColorBackend>(
    engine: &ThemeEngine<B>,
    contexts: &[RenderContext],
) -> Result<String, serde_json::Error> {
    let table = engine.table();
    let records: Vec<(RenderContext, ThemeRecord)> = contexts
        .iter()
        .map(|&context| (context, engine.resolve(context)))
        .collect();

    let report = Report {
        theme: table.theme_id().get(),
        name: palette::theme_name(table.theme_id()),
        fallback: table.is_fallback(),
        capability: table.capability(),
        contexts: records
            .iter()
            .map(|(context, record)| ContextReport {
                context: *context,
                window_id: context.window_id(),
                record,
            })
            .collect(),
    };

    serde_json::to_string_pretty(&report)
}

fn heading(table: &AttributeTable) -> String {
    let name = palette::theme_name(table.theme_id()).unwrap_or("unknown, fallback palette");
    let capability = table.capability();
    let depth = match capability.depth {
        ColorDepth::Basic8 => "8 colors",
        ColorDepth::Extended256 => "256 colors",
    };
    let defaults = if capability.default_colors {
        "default colors"
    } else {
        "no default colors"
    };
    format!("Theme {}: {name} ({depth}, {defaults})", table.theme_id())
}

fn style_names(style: Style) -> String {
    if style.is_empty() {
        return "-".to_string();
    }
    style
        .iter_names()
        .map(|(name, _)| name.to_lowercase())
        .collect::<Vec<_>>()
        .join("|")
}

fn glyph_name(glyph: SliderGlyph) -> &'static str {
    match glyph {
        SliderGlyph::None => "none",
        SliderGlyph::Diamond => "diamond",
        SliderGlyph::Block => "block",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_names() {
        assert_eq!(style_names(Style::empty()), "-");
        assert_eq!(style_names(Style::BOLD | Style::REVERSE), "bold|reverse");
    }

    #[test]
    fn test_field_line_shows_registered_colors() {
        let engine = ThemeEngine::new(
            themes::MemoryBackend::new(),
            Capability::default(),
            themes::ThemeOptions::new(1),
        );
        let table = engine.table();

        let labels = field_line(&table, "data", table.attr(Slot::Labels));
        assert!(labels.contains("pair  4"));
        assert!(labels.contains("bright-yellow/blue"));
        assert!(labels.ends_with("-\n"));

        let bare = field_line(&table, "expanded_header", Attr::new(0, Style::BOLD));
        assert!(bare.contains("terminal default"));
        assert!(bare.ends_with("bold\n"));
    }

    #[test]
    fn test_theme_list_marks_palette_features() {
        let list = theme_list();
        assert_eq!(list.lines().count(), 23);
        assert!(list.contains(" 0  mc black (default colors)"));
        assert!(list.contains("17  Solar dark (custom palette)"));
        assert!(list.contains("22  Relation pipes\n"));
    }
}
