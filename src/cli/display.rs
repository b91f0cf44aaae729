// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the shopseek CLI.
//!
//! OneDark on dark terminals, One Light on light ones. `SHOPSEEK_THEME`
//! ("dark"/"light") wins, then `COLORFGBG`, then dark. `NO_COLOR` and
//! non-TTY stdout turn colors off so output can be piped.
//!
//! Widths are measured in terminal columns: CJK characters take two.

use std::io::IsTerminal;
use std::sync::OnceLock;

use shopseek::{IndexStats, SearchPage};

/// Columns between │ and │.
pub const BOX_WIDTH: usize = 64;

// ═══════════════════════════════════════════════════════════════════════════
// THEME
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("SHOPSEEK_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg", bg 7+ (except 8) is a light background
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            rgb(match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            })
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

pub fn use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stdout().is_terminal()
}

/// Theme color plus modifiers, or plain text when colors are off.
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

fn char_width(c: char) -> usize {
    match c as u32 {
        0x1100..=0x115F
        | 0x2E80..=0x303E
        | 0x3041..=0x33FF
        | 0x3400..=0x4DBF
        | 0x4E00..=0x9FFF
        | 0xA000..=0xA4CF
        | 0xAC00..=0xD7A3
        | 0xF900..=0xFAFF
        | 0xFE30..=0xFE4F
        | 0xFF00..=0xFF60
        | 0xFFE0..=0xFFE6 => 2,
        _ => 1,
    }
}

/// Terminal columns of `s`, ANSI escapes excluded.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += char_width(c);
        }
    }
    len
}

pub fn pad_left(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    format!("{}{}", " ".repeat(width.saturating_sub(visible)), s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(visible)))
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// │ content          │
pub fn row(content: &str) {
    let border = themed(GRAY, &[], "│");
    println!("{}{}{}", border, pad_right(content, BOX_WIDTH), border);
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        themed(GRAY, &[], "┌"),
        label_part,
        themed(GRAY, &[], &format!("{}┐", "─".repeat(remaining)))
    );
}

/// └──────────────────┘
pub fn section_bot() {
    println!("{}", themed(GRAY, &[], &format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Score colored by magnitude.
pub fn score_value(score: f64) -> String {
    let text = format!("{:>9.3}", score);
    let color: fn() -> String = if score >= 20.0 {
        GREEN
    } else if score >= 5.0 {
        YELLOW
    } else {
        GRAY
    };
    themed(color, &[], &text)
}

pub fn error_label() -> String {
    themed(RED, &[BOLD], "error:")
}

pub fn print_search_page(query: &str, page: usize, result: &SearchPage) {
    section_top(&format!("SEARCH \"{}\"", query));
    if result.hits.is_empty() {
        row(&themed(GRAY, &[DIM], " no results"));
    } else {
        row(&themed(
            GRAY,
            &[],
            &format!(" {:>4}  {:>12}  {:>12}  {:>9}", "#", "spuId", "productId", "score"),
        ));
        for (i, hit) in result.hits.iter().enumerate() {
            row(&format!(
                " {:>4}  {}  {:>12}  {}",
                i + 1,
                themed(BLUE, &[BOLD], &format!("{:>12}", hit.spu_id)),
                hit.product_id,
                score_value(hit.score)
            ));
        }
    }
    row(&format!(
        " page {} · {} of {} results",
        page,
        result.hits.len(),
        result.total
    ));
    section_bot();
}

pub fn print_tokens(text: &str, tokens: &[String]) {
    section_top("ANALYZE");
    row(&format!(" input   {}", text));
    let rendered: Vec<String> = tokens
        .iter()
        .map(|t| themed(GREEN, &[], &format!("[{}]", t)))
        .collect();
    row(&format!(" tokens  {}", rendered.join(" ")));
    section_bot();
}

pub fn print_synonyms(word: &str, synonyms: &[String]) {
    section_top(&format!("SYNONYMS \"{}\"", word));
    if synonyms.is_empty() {
        row(&themed(GRAY, &[DIM], " none"));
    }
    for synonym in synonyms {
        row(&format!(" {}", synonym));
    }
    section_bot();
}

pub fn print_stats(stats: &IndexStats) {
    section_top("INDEX");
    let line = |label: &str, value: String| {
        row(&format!(" {} {}", pad_right(label, 18), pad_left(&value, 12)));
    };
    line("products", stats.products.to_string());
    line("terms", stats.terms.to_string());
    line("postings", stats.postings.to_string());
    line("synonym headwords", stats.synonym_headwords.to_string());
    line("generation", stats.generation.to_string());
    section_bot();
}
