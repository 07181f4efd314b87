// Sortlab - Step-by-step sorting algorithm visualizer
// Module declarations

use tauri::Manager;

mod catalog;
mod commands;
mod playback;
mod sorter;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            if cfg!(debug_assertions) {
                app.handle().plugin(
                    tauri_plugin_log::Builder::default()
                        .level(log::LevelFilter::Info)
                        .build(),
                )?;
            }

            // Playback state lives here for the whole session
            app.manage(commands::VisualizerState::default());

            log::info!("Sortlab initialized successfully");
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::generate_array,
            commands::start_sort,
            commands::toggle_play_pause,
            commands::step_forward,
            commands::step_backward,
            commands::reset_playback,
            commands::set_speed,
            commands::set_array_size,
            commands::set_algorithm,
            commands::get_playback_state,
            commands::get_current_frame,
            commands::get_run_stats,
            commands::list_algorithms,
            commands::get_algorithm,
            commands::list_algorithm_names,
            commands::list_categories,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
