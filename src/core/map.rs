//! World grid: loading, saving and the built-in fallback layout.
use crate::core::tile::{Cell, TileType};
use crate::error::{EngineError, Result};
use std::fs;
use std::path::Path;

/// Border and interior-segment cells of the fallback map.
const FALLBACK_WALL: Cell = Cell::with_tile(TileType::Wall, 1);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorldMap {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl WorldMap {
    /// All-floor map of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, cells: vec![Cell::EMPTY; width * height] }
    }

    #[inline] pub fn width(&self) -> usize { self.width }
    #[inline] pub fn height(&self) -> usize { self.height }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// `None` outside the grid.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        if self.in_bounds(x, y) {
            Some(self.cells[y as usize * self.width + x as usize])
        } else {
            None
        }
    }

    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = cell;
        }
    }

    /// Out-of-bounds cells are never walkable.
    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_some_and(Cell::is_walkable)
    }

    /// Exact number of bytes a map file of this size holds.
    pub fn byte_len(width: usize, height: usize) -> usize {
        width * height * 2
    }

    /// Decodes `width * height` cells, rows outermost and x varying fastest.
    /// Bytes past the end of the grid are ignored.
    pub fn from_bytes(width: usize, height: usize, bytes: &[u8]) -> Result<Self> {
        let expected = Self::byte_len(width, height);
        if bytes.len() < expected {
            return Err(EngineError::MapTruncated { expected, actual: bytes.len() });
        }
        if bytes.len() > expected {
            log::debug!("ignoring {} trailing map bytes", bytes.len() - expected);
        }
        let cells = bytes[..expected]
            .chunks_exact(2)
            .map(|pair| Cell::new(pair[0], pair[1]))
            .collect();
        Ok(Self { width, height, cells })
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.cells.iter().flat_map(|c| [c.tile, c.event]).collect()
    }

    pub fn load(path: &Path, width: usize, height: usize) -> Result<Self> {
        let bytes = fs::read(path)?;
        let map = Self::from_bytes(width, height, &bytes)?;
        log::info!("Map loaded from {:?} ({}x{})", path, width, height);
        Ok(map)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_bytes())?;
        Ok(())
    }

    /// Loads `path`, or returns the fallback map if the file is missing or short.
    pub fn load_or_fallback(path: &Path, width: usize, height: usize) -> Self {
        match Self::load(path, width, height) {
            Ok(map) => map,
            Err(e) => {
                log::warn!("Failed to load map {:?}: {}. Using default map.", path, e);
                Self::fallback(width, height)
            }
        }
    }

    /// Walled room with one horizontal wall run at row 10, columns 5..19.
    pub fn fallback(width: usize, height: usize) -> Self {
        let mut map = Self::new(width, height);
        for y in 0..height {
            for x in 0..width {
                if x == 0 || y == 0 || x + 1 == width || y + 1 == height {
                    map.set(x, y, FALLBACK_WALL);
                }
            }
        }
        for x in 5..19 {
            map.set(x, 10, FALLBACK_WALL);
        }
        map
    }
}
