use tictactoe_common::config::{ConfigManager, FileContentConfigProvider, GameConfig, YamlConfigSerializer};

pub const CONFIG_FILE: &str = "tictactoe_console_config.yaml";

pub fn get_config_manager(
    file_path: &str,
) -> ConfigManager<FileContentConfigProvider, GameConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(file_path)
}
