use crate::commands::{CmdMessage, CmdResult};
use crate::config::PicstashConfig;
use crate::error::Result;
use crate::model::Layout;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    SetLayout(Layout),
    SetQuality(u8),
}

pub fn run(root: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = PicstashConfig::load(root)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll | ConfigAction::ShowKey(_) => {}
        ConfigAction::SetLayout(layout) => {
            config.layout = layout;
            config.save(root)?;
            result.add_message(CmdMessage::success(format!("layout set to {}", layout)));
        }
        ConfigAction::SetQuality(quality) => {
            config.set_jpeg_quality(quality);
            config.save(root)?;
            result.add_message(CmdMessage::success(format!(
                "quality set to {}",
                config.jpeg_quality
            )));
        }
    }

    Ok(result.with_config(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn show_all_returns_the_config_without_writing() {
        let temp = TempDir::new().unwrap();
        let result = run(temp.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config.unwrap(), PicstashConfig::default());
        assert!(!temp.path().join(".picstash.json").exists());
    }

    #[test]
    fn set_layout_persists() {
        let temp = TempDir::new().unwrap();
        run(temp.path(), ConfigAction::SetLayout(Layout::Items)).unwrap();

        let loaded = PicstashConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.layout, Layout::Items);
    }

    #[test]
    fn set_quality_clamps_and_persists() {
        let temp = TempDir::new().unwrap();
        let result = run(temp.path(), ConfigAction::SetQuality(200)).unwrap();
        assert_eq!(result.config.unwrap().jpeg_quality, 100);

        let loaded = PicstashConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.jpeg_quality, 100);
    }
}
