// Tauri IPC Commands
use serde::Serialize;
use tauri::State;

use crate::catalog;
use crate::playback::{PlaybackController, PlaybackSnapshot};
use crate::sorter::{Frame, RunStats, SortAlgorithm};

#[derive(Debug, Serialize)]
pub struct CommandError {
    message: String,
}

impl<E: std::fmt::Display> From<E> for CommandError {
    fn from(error: E) -> Self {
        CommandError {
            message: error.to_string(),
        }
    }
}

type CommandResult<T> = Result<T, CommandError>;

/// Visualizer state managed by Tauri
pub struct VisualizerState(pub PlaybackController);

impl Default for VisualizerState {
    fn default() -> Self {
        Self(PlaybackController::new())
    }
}

// ==================== TRANSPORT COMMANDS ====================

/// Replace the working array with a fresh random one
#[tauri::command]
pub fn generate_array(state: State<'_, VisualizerState>) -> CommandResult<PlaybackSnapshot> {
    state.0.generate_array();

    let snapshot = state.0.snapshot();
    log::info!("Generated array of {} elements", snapshot.array_size);
    Ok(snapshot)
}

/// Trace the selected algorithm over the current array and start playback
#[tauri::command]
pub fn start_sort(state: State<'_, VisualizerState>) -> CommandResult<PlaybackSnapshot> {
    state.0.start_sort();

    let snapshot = state.0.snapshot();
    log::info!(
        "{} started: {} frames, {} comparisons, {} swaps",
        snapshot.algorithm.display_name(),
        snapshot.last_index + 1,
        snapshot.stats.comparisons,
        snapshot.stats.swaps
    );
    Ok(snapshot)
}

#[tauri::command]
pub fn toggle_play_pause(state: State<'_, VisualizerState>) -> CommandResult<PlaybackSnapshot> {
    state.0.toggle_play_pause();
    Ok(state.0.snapshot())
}

#[tauri::command]
pub fn step_forward(state: State<'_, VisualizerState>) -> CommandResult<PlaybackSnapshot> {
    state.0.step_forward();
    Ok(state.0.snapshot())
}

#[tauri::command]
pub fn step_backward(state: State<'_, VisualizerState>) -> CommandResult<PlaybackSnapshot> {
    state.0.step_backward();
    Ok(state.0.snapshot())
}

/// Rewind to the first frame, keeping the trace
#[tauri::command]
pub fn reset_playback(state: State<'_, VisualizerState>) -> CommandResult<PlaybackSnapshot> {
    state.0.reset();
    Ok(state.0.snapshot())
}

// ==================== SETTINGS COMMANDS ====================

#[tauri::command]
pub fn set_speed(
    state: State<'_, VisualizerState>,
    speed: u32,
) -> CommandResult<PlaybackSnapshot> {
    state.0.set_speed(speed);
    Ok(state.0.snapshot())
}

#[tauri::command]
pub fn set_array_size(
    state: State<'_, VisualizerState>,
    size: usize,
) -> CommandResult<PlaybackSnapshot> {
    state.0.set_array_size(size);
    Ok(state.0.snapshot())
}

/// Select the algorithm to animate; unknown ids are rejected
#[tauri::command]
pub fn set_algorithm(
    state: State<'_, VisualizerState>,
    algorithm: String,
) -> CommandResult<PlaybackSnapshot> {
    let algorithm =
        SortAlgorithm::from_string(&algorithm).map_err(|e| CommandError::from(e))?;

    state.0.set_algorithm(algorithm);
    Ok(state.0.snapshot())
}

// ==================== QUERY COMMANDS ====================

#[tauri::command]
pub fn get_playback_state(state: State<'_, VisualizerState>) -> CommandResult<PlaybackSnapshot> {
    Ok(state.0.snapshot())
}

/// The frame the cursor currently points at (array + annotations)
#[tauri::command]
pub fn get_current_frame(state: State<'_, VisualizerState>) -> CommandResult<Frame> {
    Ok(state.0.current_frame())
}

#[tauri::command]
pub fn get_run_stats(state: State<'_, VisualizerState>) -> CommandResult<RunStats> {
    Ok(state.0.stats())
}

// ==================== CATALOG COMMANDS ====================

/// List all reference entries as browsing summaries
#[tauri::command]
pub fn list_algorithms() -> CommandResult<Vec<catalog::AlgorithmSummary>> {
    Ok(catalog::list_algorithms())
}

/// Get a specific reference entry by id
#[tauri::command]
pub fn get_algorithm(id: String) -> CommandResult<Option<catalog::AlgorithmEntry>> {
    Ok(catalog::get_algorithm(&id))
}

/// Get all reference entry ids
#[tauri::command]
pub fn list_algorithm_names() -> CommandResult<Vec<String>> {
    Ok(catalog::list_algorithm_names())
}

/// The browsing categories, in display order
#[tauri::command]
pub fn list_categories() -> CommandResult<Vec<catalog::Category>> {
    Ok(catalog::list_categories())
}
