//! Two-byte map cells and their bit-packed fields.
//!
//! ```text
//! tile byte:  TT IIIIII   TT = tile type, IIIIII = texture index
//! event byte: EEE NNNNN   EEE = event type, NNNNN = event id
//! ```

const TILE_TYPE_MASK: u8 = 0xC0;
const TEXTURE_INDEX_MASK: u8 = 0x3F;
const EVENT_TYPE_MASK: u8 = 0xE0;
const EVENT_ID_MASK: u8 = 0x1F;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TileType {
    Floor = 0,
    Wall = 1,
    HalfFloor = 2,
    HalfWall = 3,
}

impl TileType {
    /// Total over all bytes: only the top two bits are looked at.
    #[inline]
    pub fn from_tile_byte(b: u8) -> Self {
        match (b & TILE_TYPE_MASK) >> 6 {
            0 => TileType::Floor,
            1 => TileType::Wall,
            2 => TileType::HalfFloor,
            _ => TileType::HalfWall,
        }
    }

    /// Floor and HalfFloor share a clear low type bit.
    #[inline]
    pub fn is_walkable(self) -> bool {
        (self as u8) & 1 == 0
    }

    /// Anything but plain floor stops a ray.
    #[inline]
    pub fn blocks_ray(self) -> bool {
        self != TileType::Floor
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cell {
    pub tile: u8,
    pub event: u8,
}

impl Cell {
    pub const EMPTY: Cell = Cell { tile: 0, event: 0 };

    pub const fn new(tile: u8, event: u8) -> Self {
        Self { tile, event }
    }

    /// Packs a tile type and texture index; the index is masked to six bits.
    pub const fn with_tile(kind: TileType, texture: u8) -> Self {
        Self { tile: ((kind as u8) << 6) | (texture & TEXTURE_INDEX_MASK), event: 0 }
    }

    #[inline]
    pub fn tile_type(self) -> TileType {
        TileType::from_tile_byte(self.tile)
    }

    #[inline]
    pub fn texture_index(self) -> u8 {
        self.tile & TEXTURE_INDEX_MASK
    }

    #[inline]
    pub fn event_type(self) -> u8 {
        (self.event & EVENT_TYPE_MASK) >> 5
    }

    #[inline]
    pub fn event_id(self) -> u8 {
        self.event & EVENT_ID_MASK
    }

    #[inline]
    pub fn is_walkable(self) -> bool {
        self.tile_type().is_walkable()
    }

    pub fn decode(self) -> DecodedCell {
        DecodedCell {
            tile_type: self.tile_type(),
            texture_index: self.texture_index(),
            event_type: self.event_type(),
            event_id: self.event_id(),
        }
    }
}

/// All four fields of a cell, unpacked.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DecodedCell {
    pub tile_type: TileType,
    pub texture_index: u8,
    pub event_type: u8,
    pub event_id: u8,
}
