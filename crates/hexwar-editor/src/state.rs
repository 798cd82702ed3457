//! Editor configuration: brush settings and display toggles (§4.6).

use hexwar_contracts::EngineError;

/// The largest accepted brush radius.
pub const MAX_BRUSH_SIZE: u32 = 5;

/// The editor's current tool configuration. Not itself tied to a
/// [`hexwar_world::World`] — callers pass the world explicitly to the
/// free functions in this crate.
#[derive(Debug, Clone)]
pub struct EditorState {
    pub filename: String,
    pub brush_terrain: i32,
    pub brush_size: u32,
    pub show_grid: bool,
    pub show_coordinates: bool,
    pub modified: bool,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            filename: String::new(),
            brush_terrain: 1,
            brush_size: 0,
            show_grid: true,
            show_coordinates: false,
            modified: false,
        }
    }
}

impl EditorState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_brush_terrain(&mut self, terrain_type: i32) {
        self.brush_terrain = terrain_type;
    }

    /// Sets the brush radius, rejecting anything outside `0..=5` (§4.6).
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfBounds`] if `size` exceeds [`MAX_BRUSH_SIZE`].
    pub fn set_brush_size(&mut self, size: u32) -> Result<(), EngineError> {
        if size > MAX_BRUSH_SIZE {
            return Err(EngineError::OutOfBounds);
        }
        self.brush_size = size;
        Ok(())
    }

    pub fn set_show_grid(&mut self, show: bool) {
        self.show_grid = show;
    }

    pub fn set_show_coordinates(&mut self, show: bool) {
        self.show_coordinates = show;
    }
}
