use super::{render, App};
use crate::SettingsCommands;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use comfy_table::Cell;
use reelshelf_core::UserSettings;

pub async fn run_settings(app: &App, cmd: Option<SettingsCommands>) -> Result<()> {
    match cmd.unwrap_or(SettingsCommands::Show) {
        SettingsCommands::Show => show(app, &app.settings_store().load()),
        SettingsCommands::Set { key, value } => {
            let mut store = app.settings_store();
            let mut settings = store.load();
            settings.set(&key, &value).map_err(|e| eyre!("{}", e))?;
            store
                .save(&settings)
                .map_err(|e| eyre!("Failed to save settings: {}", e))?;
            app.output.success(format!("{} = {}", key, value));
            Ok(())
        }
        SettingsCommands::Reset => {
            app.settings_store()
                .reset()
                .map_err(|e| eyre!("Failed to reset settings: {}", e))?;
            app.output.success("Settings reset to defaults");
            Ok(())
        }
    }
}

fn show(app: &App, settings: &UserSettings) -> Result<()> {
    if app.output.emit(settings)? {
        return Ok(());
    }

    let mut table = render::new_table(vec!["Setting", "Value"]);
    table.add_row(vec![Cell::new("dark_mode"), Cell::new(render::check(settings.dark_mode))]);
    table.add_row(vec![Cell::new("subtitles"), Cell::new(render::check(settings.subtitles))]);
    table.add_row(vec![Cell::new("autoplay"), Cell::new(render::check(settings.autoplay))]);
    table.add_row(vec![Cell::new("video_quality"), Cell::new(settings.video_quality)]);
    app.output.println(render::heading("Settings"));
    app.output.println(table.to_string());
    Ok(())
}
