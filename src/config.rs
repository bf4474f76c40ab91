use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::editor::{Direction, SearchMemory};

const APP_DIR: &str = "extmove";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub select: bool,
    pub verbose: bool,
    pub state_file: Option<PathBuf>,
}

impl ConfigFlags {
    pub fn union(&self, other: &Self) -> Self {
        Self {
            select: self.select || other.select,
            verbose: self.verbose || other.verbose,
            state_file: other
                .state_file
                .clone()
                .or_else(|| self.state_file.clone()),
        }
    }
}

fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return Some(PathBuf::from(appdata).join(APP_DIR));
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return Some(
                PathBuf::from(home)
                    .join("Library")
                    .join("Application Support")
                    .join(APP_DIR),
            );
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return Some(PathBuf::from(xdg).join(APP_DIR));
        }
        if let Some(home) = std::env::var_os("HOME") {
            return Some(PathBuf::from(home).join(".config").join(APP_DIR));
        }
    }

    None
}

pub fn global_config_path() -> PathBuf {
    config_dir().map_or_else(local_override_path, |dir| dir.join("config"))
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".extmoverc")
}

/// Where the last search character is kept between runs.
pub fn default_state_path() -> PathBuf {
    config_dir().map_or_else(|| PathBuf::from(".extmove-state"), |dir| dir.join("state"))
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# extmove defaults (saved with --save)".to_string());
    if flags.select {
        lines.push("--select".to_string());
    }
    if flags.verbose {
        lines.push("--verbose".to_string());
    }
    if let Some(path) = &flags.state_file {
        lines.push(format!("--state-file {}", path.display()));
    }
    write_lines(path, &lines)
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if token == "--select" {
            flags.select = true;
        } else if token == "--verbose" || token == "-v" {
            flags.verbose = true;
        } else if token == "--state-file" {
            if let Some(next) = tokens.get(i + 1) {
                flags.state_file = Some(PathBuf::from(next));
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--state-file=") {
            flags.state_file = Some(PathBuf::from(value));
        }
        i += 1;
    }
    flags
}

/// Read the saved search memory. A missing file is an empty memory;
/// unknown or malformed lines are ignored.
pub fn load_search_memory(path: &Path) -> Result<SearchMemory> {
    if !path.exists() {
        return Ok(SearchMemory::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read search state {}", path.display()))?;
    let mut memory = SearchMemory::default();
    for line in content.lines() {
        if let Some(value) = line.strip_prefix("char=") {
            let mut chars = value.chars();
            if let (Some(ch), None) = (chars.next(), chars.next()) {
                memory.last_char = Some(ch);
            }
        } else if let Some(value) = line.strip_prefix("direction=") {
            memory.last_direction = Direction::parse(value.trim());
        }
    }
    Ok(memory)
}

pub fn save_search_memory(path: &Path, memory: &SearchMemory) -> Result<()> {
    let mut lines = Vec::new();
    if let Some(ch) = memory.last_char {
        lines.push(format!("char={ch}"));
    }
    if let Some(direction) = memory.last_direction {
        lines.push(format!("direction={}", direction.as_str()));
    }
    write_lines(path, &lines)
}

fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write {}", path.display()))
}
