use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::drag::{INITIAL_POSITION, Point};
use crate::history::{AttributeSnapshot, FontFamily, FontStyle, SnapshotPatch};

/// Startup defaults collected from config files and the command line.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub text: Option<String>,
    pub font_size: Option<u32>,
    pub font_family: Option<FontFamily>,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub log_file: Option<PathBuf>,
    /// Values that were present but could not be used
    pub warnings: Vec<String>,
}

impl ConfigFlags {
    /// Merge two flag sets; `other` wins for valued options.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            text: other.text.clone().or_else(|| self.text.clone()),
            font_size: other.font_size.or(self.font_size),
            font_family: other.font_family.or(self.font_family),
            bold: self.bold || other.bold,
            italic: self.italic || other.italic,
            underline: self.underline || other.underline,
            x: other.x.or(self.x),
            y: other.y.or(self.y),
            log_file: other.log_file.clone().or_else(|| self.log_file.clone()),
            warnings: self
                .warnings
                .iter()
                .chain(&other.warnings)
                .cloned()
                .collect(),
        }
    }

    /// The first history entry described by these flags.
    pub fn seed_snapshot(&self) -> AttributeSnapshot {
        AttributeSnapshot::default().with_patch(SnapshotPatch {
            text: self.text.clone(),
            font_size: self.font_size,
            font_style: self.italic.then_some(FontStyle::Italic),
            is_bold: self.bold.then_some(true),
            font_family: self.font_family,
            is_underline: self.underline.then_some(true),
        })
    }

    pub fn initial_position(&self) -> Point {
        Point::new(
            self.x.unwrap_or(INITIAL_POSITION.x),
            self.y.unwrap_or(INITIAL_POSITION.y),
        )
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("dragbox").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("dragbox")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("dragbox").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".config")
                .join("dragbox")
                .join("config");
        }
    }

    local_override_path()
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".dragboxrc")
}

/// Read a flag file. A missing file yields empty flags.
///
/// Each non-comment line holds one flag, optionally followed by a value
/// that runs to the end of the line, so `--font-family Times New Roman`
/// works without quoting.
pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let mut tokens = Vec::new();
    for line in content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
    {
        let (flag, value) = match line.split_once(char::is_whitespace) {
            Some((flag, value)) if !flag.contains('=') => (flag, Some(value.trim())),
            _ => match line.split_once('=') {
                Some((flag, value)) => (flag, Some(value)),
                None => (line, None),
            },
        };
        tokens.push(flag.to_string());
        if let Some(value) = value {
            tokens.push(if flag == "--text" {
                unescape_text(value)
            } else {
                value.to_string()
            });
        }
    }
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# dragbox defaults (saved with --save)".to_string());
    if let Some(text) = &flags.text {
        lines.push(format!("--text {}", escape_text(text)));
    }
    if let Some(size) = flags.font_size {
        lines.push(format!("--font-size {size}"));
    }
    if let Some(family) = flags.font_family {
        lines.push(format!("--font-family {family}"));
    }
    if flags.bold {
        lines.push("--bold".to_string());
    }
    if flags.italic {
        lines.push("--italic".to_string());
    }
    if flags.underline {
        lines.push("--underline".to_string());
    }
    if let Some(x) = flags.x {
        lines.push(format!("--x {x}"));
    }
    if let Some(y) = flags.y {
        lines.push(format!("--y {y}"));
    }
    if let Some(path) = &flags.log_file {
        lines.push(format!("--log-file {}", path.display()));
    }
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

/// Pick the flags this app understands out of a token list.
///
/// Accepts both `--flag value` and `--flag=value`. Anything unrecognised
/// (including the program name) is skipped; unusable values are reported
/// in [`ConfigFlags::warnings`].
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i].as_str();
        let (name, inline_value) = match token.split_once('=') {
            Some((name, value)) if name.starts_with("--") => (name, Some(value)),
            _ => (token, None),
        };
        match name {
            "--bold" => flags.bold = true,
            "--italic" => flags.italic = true,
            "--underline" => flags.underline = true,
            "--text" | "--font-size" | "--font-family" | "--x" | "--y" | "--log-file" => {
                let value = match inline_value {
                    Some(value) => Some(value),
                    None => {
                        let next = tokens.get(i + 1).map(String::as_str);
                        if next.is_some() {
                            i += 1;
                        }
                        next
                    }
                };
                if let Some(value) = value {
                    apply_value(&mut flags, name, value);
                }
            }
            _ => {}
        }
        i += 1;
    }
    flags
}

fn apply_value(flags: &mut ConfigFlags, name: &str, value: &str) {
    match name {
        "--text" => flags.text = Some(value.to_string()),
        "--font-size" => match value.trim().parse::<u32>() {
            Ok(size) => flags.font_size = Some(size),
            Err(_) => flags
                .warnings
                .push(format!("Ignoring invalid font size '{value}'")),
        },
        "--font-family" => match value.parse::<FontFamily>() {
            Ok(family) => flags.font_family = Some(family),
            Err(err) => flags.warnings.push(format!("Ignoring config: {err}")),
        },
        "--x" | "--y" => match value.trim().parse::<i32>() {
            Ok(coord) if name == "--x" => flags.x = Some(coord),
            Ok(coord) => flags.y = Some(coord),
            Err(_) => flags
                .warnings
                .push(format!("Ignoring invalid {name} value '{value}'")),
        },
        "--log-file" => flags.log_file = Some(PathBuf::from(value)),
        _ => {}
    }
}

/// Escape text so it survives a one-line, whitespace-trimmed config value.
///
/// Line breaks and backslashes are always escaped; whitespace is escaped
/// only at the edges, and empty text becomes `\e`.
fn escape_text(text: &str) -> String {
    if text.is_empty() {
        return "\\e".to_string();
    }
    let lead = text.len() - text.trim_start().len();
    let tail = text.trim_end().len();
    let mut out = String::with_capacity(text.len());
    for (idx, ch) in text.char_indices() {
        let edge = idx < lead || idx >= tail;
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            ' ' if edge => out.push_str("\\s"),
            '\t' if edge => out.push_str("\\t"),
            c if edge && c.is_whitespace() => {
                out.push_str(&format!("\\u{{{:x}}}", u32::from(c)));
            }
            c => out.push(c),
        }
    }
    out
}

fn unescape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('s') => out.push(' '),
            Some('t') => out.push('\t'),
            Some('e') => {}
            Some('u') if chars.peek() == Some(&'{') => {
                chars.next();
                let hex: String = chars.by_ref().take_while(|&c| c != '}').collect();
                if let Some(c) = u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                    out.push(c);
                }
            }
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}
