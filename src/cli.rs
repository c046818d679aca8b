//! Command-line interface for z4term.
//!
//! Inspection subcommands for the pieces of state z4term keeps on disk: the
//! effective keymap, the validated configuration and a saved session.

use crate::session::storage::load_session_from;
use crate::session::{SessionDocument, SessionPaneNode};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use z4term_config::Config;
use z4term_keybindings::Keymap;

/// z4term - a tabbed, split-pane terminal shell
#[derive(Parser)]
#[command(name = "z4term")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log level (error, warn, info, debug, trace); overrides RUST_LOG
    #[arg(long, global = true, value_name = "LEVEL", value_parser = parse_log_level)]
    pub log_level: Option<log::LevelFilter>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the effective keymap and any bindings that failed to parse
    Keys,
    /// Print the config file path and the validated settings
    Config,
    /// Print a saved session as a tree, without consuming it
    Session {
        /// Session file to read (default: the session file in the config directory)
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,
    },
}

fn parse_log_level(s: &str) -> Result<log::LevelFilter, String> {
    crate::debug::parse_level_filter(s).ok_or_else(|| format!("unknown log level '{}'", s))
}

/// Run a parsed command, writing its report to stdout
pub fn run(cli: &Cli) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match &cli.command {
        Commands::Keys => {
            let config = Config::load()?;
            write_keys(&Keymap::from_config(&config.keybindings), &mut out)?;
        }
        Commands::Config => {
            let config = Config::load()?;
            write_config(&config, &mut out)?;
        }
        Commands::Session { file } => {
            let path = file.clone().unwrap_or_else(Config::session_path);
            match load_session_from(&path)? {
                Some(doc) => write_session(&doc, &mut out)?,
                None => writeln!(out, "No saved session at {}", path.display())?,
            }
        }
    }
    Ok(())
}

/// Write one `trigger -> action` line per binding, sorted, then the
/// dropped bindings
pub fn write_keys(keymap: &Keymap, out: &mut dyn Write) -> Result<()> {
    let mut entries: Vec<(String, &str)> = keymap
        .iter()
        .map(|(trigger, action)| (trigger.to_string(), action))
        .collect();
    entries.sort_by(|a, b| a.1.cmp(b.1).then_with(|| a.0.cmp(&b.0)));

    for (trigger, action) in &entries {
        writeln!(out, "{:<28} {}", trigger, action)?;
    }

    if !keymap.dropped().is_empty() {
        writeln!(out)?;
        writeln!(out, "Ignored bindings:")?;
        for (binding, err) in keymap.dropped() {
            writeln!(out, "  {:<26} {} ({})", binding.key, binding.action, err)?;
        }
    }
    Ok(())
}

pub fn write_config(config: &Config, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "config file:            {}", Config::config_path().display())?;
    writeln!(out, "session file:           {}", Config::session_path().display())?;
    writeln!(out, "font:                   {} {}", config.font_family, config.font_size)?;
    writeln!(out, "scrollback_lines:       {}", config.scrollback_lines)?;
    writeln!(out, "shell:                  {}", config.resolve_shell())?;
    writeln!(out, "theme:                  {}", config.theme)?;
    writeln!(out, "opacity:                {}", config.opacity)?;
    writeln!(
        out,
        "notification_threshold: {}s",
        config.notification_threshold
    )?;
    writeln!(out, "keybindings:")?;
    for binding in &config.keybindings {
        writeln!(out, "  {:<18} {}", binding.action, binding.key)?;
    }
    Ok(())
}

/// Write a session document as an indented tree
pub fn write_session(doc: &SessionDocument, out: &mut dyn Write) -> Result<()> {
    writeln!(
        out,
        "window {}x{}, {} tab(s)",
        doc.window_width,
        doc.window_height,
        doc.tabs.len()
    )?;
    for (i, tab) in doc.tabs.iter().enumerate() {
        writeln!(out, "tab {}", i + 1)?;
        write_node(Some(tab), 1, out).with_context(|| format!("Failed to write tab {}", i + 1))?;
    }
    Ok(())
}

fn write_node(node: Option<&SessionPaneNode>, indent: usize, out: &mut dyn Write) -> Result<()> {
    let pad = "  ".repeat(indent);
    match node {
        None => writeln!(out, "{}(empty)", pad)?,
        Some(SessionPaneNode::Terminal { cwd }) => {
            writeln!(out, "{}terminal {}", pad, cwd.as_deref().unwrap_or("~"))?
        }
        Some(SessionPaneNode::Paned {
            orientation,
            position,
            child1,
            child2,
        }) => {
            match position {
                Some(p) => writeln!(out, "{}paned {} position={}", pad, orientation, p)?,
                None => writeln!(out, "{}paned {}", pad, orientation)?,
            }
            write_node(child1.as_deref(), indent + 1, out)?;
            write_node(child2.as_deref(), indent + 1, out)?;
        }
        Some(SessionPaneNode::Unknown) => writeln!(out, "{}(unknown)", pad)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pane::Orientation;
    use z4term_config::KeyBinding;

    fn render(f: impl FnOnce(&mut dyn Write) -> Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_cli_parses_subcommands() {
        let cli = Cli::try_parse_from(["z4term", "session", "--file", "/tmp/s.json"]).unwrap();
        match cli.command {
            Commands::Session { file } => assert_eq!(file, Some(PathBuf::from("/tmp/s.json"))),
            _ => panic!("expected session"),
        }

        let cli = Cli::try_parse_from(["z4term", "keys", "--log-level", "debug"]).unwrap();
        assert!(matches!(cli.command, Commands::Keys));
        assert_eq!(cli.log_level, Some(log::LevelFilter::Debug));

        assert!(Cli::try_parse_from(["z4term", "keys", "--log-level", "loud"]).is_err());
        assert!(Cli::try_parse_from(["z4term"]).is_err());
    }

    #[test]
    fn test_write_keys_lists_bindings_and_dropped() {
        let keymap = Keymap::from_config(&[
            KeyBinding::new("Ctrl+Tab", "next_pane"),
            KeyBinding::new("Ctrl+Shift", "broken"),
        ]);
        let text = render(|out| write_keys(&keymap, out));
        assert!(text.contains("next_pane"));
        assert!(text.contains("Ignored bindings:"));
        assert!(text.contains("broken"));
    }

    #[test]
    fn test_write_session_tree() {
        let doc = SessionDocument {
            window_width: 800,
            window_height: 600,
            tabs: vec![SessionPaneNode::Paned {
                orientation: Orientation::Horizontal,
                position: Some(400),
                child1: Some(Box::new(SessionPaneNode::Terminal {
                    cwd: Some("/srv".to_string()),
                })),
                child2: None,
            }],
        };
        let text = render(|out| write_session(&doc, out));
        assert_eq!(
            text,
            "window 800x600, 1 tab(s)\ntab 1\n  paned horizontal position=400\n    terminal /srv\n    (empty)\n"
        );
    }
}
