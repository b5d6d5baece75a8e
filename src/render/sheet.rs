//! Drawing sheet
//!
//! A backend-neutral list of text, rectangles and rules in millimetres.
//! Origin is the top-left corner and y grows downward; text `y` is the baseline.

use serde::Serialize;

/// Points to millimetres
pub const PT_TO_MM: f32 = 25.4 / 72.0;

/// RGB colour
pub type Color = (u8, u8, u8);

pub const COLOR_BLACK: Color = (0, 0, 0);
pub const COLOR_WHITE: Color = (255, 255, 255);
pub const COLOR_MUTED: Color = (90, 90, 90);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Element {
    Text {
        x: f32,
        y: f32,
        text: String,
        size_pt: f32,
        bold: bool,
        color: Color,
        align: Align,
    },
    FilledRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
    Rule {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        thickness: f32,
        color: Color,
    },
}

/// A laid-out label ready for any backend
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelSheet {
    pub width: f32,
    pub height: f32,
    pub elements: Vec<Element>,
}

impl LabelSheet {
    pub fn new(width: f32) -> Self {
        Self {
            width,
            height: 0.0,
            elements: Vec::new(),
        }
    }

    /// Text with its anchor at `x`; `y` is the baseline
    #[allow(clippy::too_many_arguments)]
    pub fn text(
        &mut self,
        x: f32,
        y: f32,
        text: impl Into<String>,
        size_pt: f32,
        bold: bool,
        color: Color,
        align: Align,
    ) {
        self.elements.push(Element::Text {
            x,
            y,
            text: text.into(),
            size_pt,
            bold,
            color,
            align,
        });
    }

    pub fn rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.elements.push(Element::FilledRect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    pub fn rule(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, thickness: f32) {
        self.elements.push(Element::Rule {
            x1,
            y1,
            x2,
            y2,
            thickness,
            color: COLOR_BLACK,
        });
    }

    /// Horizontal black rule
    pub fn hrule(&mut self, x1: f32, x2: f32, y: f32, thickness: f32) {
        self.rule(x1, y, x2, y, thickness);
    }

    /// Unfilled black box drawn with four rules
    pub fn frame(&mut self, x: f32, y: f32, width: f32, height: f32, thickness: f32) {
        self.hrule(x, x + width, y, thickness);
        self.hrule(x, x + width, y + height, thickness);
        self.rule(x, y, x, y + height, thickness);
        self.rule(x + width, y, x + width, y + height, thickness);
    }

    /// Every text run, in drawing order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().filter_map(|e| match e {
            Element::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t.contains(needle))
    }

    /// Move every element down by `dy` and grow the sheet
    pub fn offset_y(&mut self, dy: f32) {
        for element in &mut self.elements {
            match element {
                Element::Text { y, .. } | Element::FilledRect { y, .. } => *y += dy,
                Element::Rule { y1, y2, .. } => {
                    *y1 += dy;
                    *y2 += dy;
                }
            }
        }
        self.height += dy;
    }
}

/// Approximate advance of one character in Helvetica, in ems
fn char_advance(c: char, bold: bool) -> f32 {
    let base = match c {
        ' ' | 'i' | 'j' | 'l' | '.' | ',' | ':' | ';' | '\'' | '|' | '!' | 'í' | 'I' => 0.278,
        'f' | 't' | 'r' | '(' | ')' | '-' | '*' => 0.333,
        '%' => 0.889,
        'm' | 'M' | 'W' => 0.833,
        'w' => 0.722,
        '0'..='9' => 0.556,
        c if c.is_uppercase() => 0.667,
        _ => 0.556,
    };
    if bold {
        base * 1.06
    } else {
        base
    }
}

/// Estimated width of `text` in millimetres
pub fn estimate_text_width(text: &str, size_pt: f32, bold: bool) -> f32 {
    let ems: f32 = text.chars().map(|c| char_advance(c, bold)).sum();
    ems * size_pt * PT_TO_MM
}

/// Greedy word wrap; a word wider than `max_width` gets a line of its own
pub fn wrap_text(text: &str, size_pt: f32, bold: bool, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate = format!("{} {}", current, word);
        if estimate_text_width(&candidate, size_pt, bold) <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_width_scales_with_size() {
        let small = estimate_text_width("Sódio (mg)", 8.0, false);
        let large = estimate_text_width("Sódio (mg)", 16.0, false);
        assert!(small > 0.0);
        assert!((large - 2.0 * small).abs() < 1e-4);
        assert!(estimate_text_width("ALTO EM", 8.0, true) > estimate_text_width("ALTO EM", 8.0, false));
        assert_eq!(estimate_text_width("", 10.0, false), 0.0);
    }

    #[test]
    fn test_wrap_respects_width() {
        let text = "Valor energético 450,0 kcal (135,0 kcal, 7%) • Carboidratos 65,5 g (19,7 g, 7%)";
        let lines = wrap_text(text, 8.0, false, 40.0);
        assert!(lines.len() > 1);
        for line in &lines {
            if line.contains(' ') {
                assert!(estimate_text_width(line, 8.0, false) <= 40.0, "{}", line);
            }
        }
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn test_wrap_long_word_and_empty() {
        assert_eq!(wrap_text("Castanha-do-brasil", 12.0, false, 5.0), vec!["Castanha-do-brasil"]);
        assert!(wrap_text("   ", 8.0, false, 50.0).is_empty());
    }

    #[test]
    fn test_sheet_elements() {
        let mut sheet = LabelSheet::new(90.0);
        sheet.rect(0.0, 0.0, 90.0, 7.0, COLOR_BLACK);
        sheet.text(45.0, 5.0, "INFORMAÇÃO NUTRICIONAL", 10.0, true, COLOR_WHITE, Align::Center);
        sheet.frame(0.0, 0.0, 90.0, 50.0, 0.5);
        assert_eq!(sheet.elements.len(), 6);
        assert!(sheet.contains_text("NUTRICIONAL"));
        assert_eq!(sheet.texts().count(), 1);
    }

    #[test]
    fn test_offset_moves_everything() {
        let mut sheet = LabelSheet::new(50.0);
        sheet.text(1.0, 2.0, "a", 8.0, false, COLOR_BLACK, Align::Left);
        sheet.hrule(0.0, 50.0, 3.0, 0.2);
        sheet.height = 10.0;
        sheet.offset_y(5.0);
        assert_eq!(sheet.height, 15.0);
        assert!(matches!(sheet.elements[0], Element::Text { y, .. } if y == 7.0));
        assert!(matches!(sheet.elements[1], Element::Rule { y1, y2, .. } if y1 == 8.0 && y2 == 8.0));
    }
}
