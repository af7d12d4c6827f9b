//! Mutable launcher state, owned by the event loop.
//!
//! Pages are a derived view: recomputed whenever the tile list changes,
//! never edited directly. The audio synth is created lazily on the first
//! cue and reused afterward.

use vitrine_audio::CueSynth;
use vitrine_grid::{GRID_COLS, GridSpec, Page, SelectionState, build_pages, navigate};
use vitrine_types::config::LauncherConfig;
use vitrine_types::{Direction, Tile, TileId};
use vitrine_voice::VoiceListener;

pub struct AppState {
    pub config: LauncherConfig,
    pub tiles: Vec<Tile>,
    /// Derived from `tiles`; rebuilt by `set_tiles`.
    pub pages: Vec<Page>,
    pub selection: SelectionState,
    pub listener: VoiceListener,
    cue: Option<CueSynth>,
}

impl AppState {
    pub fn new(config: LauncherConfig, tiles: Vec<Tile>) -> Self {
        let pages = build_pages(&tiles, &GridSpec::default());
        let mut listener = VoiceListener::default();
        if config.voice_enabled {
            listener.toggle();
        }
        Self {
            config,
            tiles,
            pages,
            selection: SelectionState::default(),
            listener,
            cue: None,
        }
    }

    /// Replace the catalog: recompute pages and correct a stale
    /// selection.
    pub fn set_tiles(&mut self, tiles: Vec<Tile>) {
        self.tiles = tiles;
        self.pages = build_pages(&self.tiles, &GridSpec::default());
        self.selection.ensure_valid(self.tiles.len());
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn current_page(&self) -> Option<&Page> {
        self.pages.get(self.selection.page)
    }

    pub fn selected_tile(&self) -> Option<&Tile> {
        self.tiles.get(self.selection.selected)
    }

    /// Apply a directional command. Plays the navigation cue only when
    /// the selection actually changed. Returns whether it did.
    pub fn apply_direction(&mut self, direction: Direction) -> bool {
        let out = navigate(direction, self.selection, &self.pages, GRID_COLS);
        self.selection = out.state;
        if out.moved {
            self.play_cue();
        }
        out.moved
    }

    /// Direct selection from a pointer click on the visible page.
    /// Returns false for an id that is not in the catalog.
    pub fn select_tile(&mut self, id: TileId) -> bool {
        if id >= self.tiles.len() {
            log::warn!("Ignoring click on unknown tile {id}");
            return false;
        }
        self.selection.select(id);
        true
    }

    fn play_cue(&mut self) {
        let synth = self.cue.get_or_insert_with(CueSynth::default);
        // Rendered samples go to the audio backend; the kiosk shell has
        // none, so the cue ends here.
        let samples = synth.render();
        log::debug!("Navigation cue: {} samples", samples.len());
    }

    #[cfg(test)]
    pub(crate) fn cue_created(&self) -> bool {
        self.cue.is_some()
    }
}
