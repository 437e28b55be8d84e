//! Editable parameter set, edit cursor and packed preset codec.

/// Upper bound of every editable parameter.
pub const MAX_PARAM: i32 = 63;

/// Width of one packed parameter field in bits.
const FIELD_WIDTH: u32 = 6;

/// One editable parameter, in cursor order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Param {
    Tone0,
    Decay0,
    Tone1,
    Decay1,
    Blend,
}

impl Param {
    pub const ALL: [Param; 5] = [
        Param::Tone0,
        Param::Decay0,
        Param::Tone1,
        Param::Decay1,
        Param::Blend,
    ];

    /// Map an edit cursor position in `0..=4` to its parameter.
    pub fn from_cursor(cursor: usize) -> Option<Param> {
        Self::ALL.get(cursor).copied()
    }
}

/// Bit position of one parameter inside the packed preset word.
struct PackField {
    param: Param,
    offset: u32,
    width: u32,
}

/// Preset layout: five 6-bit fields packed LSB-first into a 30-bit word.
/// The offsets are part of the preset format and must not change, or
/// previously saved presets will decode to different parameters.
const PACK_FIELDS: [PackField; 5] = [
    PackField {
        param: Param::Tone0,
        offset: 0,
        width: FIELD_WIDTH,
    },
    PackField {
        param: Param::Decay0,
        offset: 6,
        width: FIELD_WIDTH,
    },
    PackField {
        param: Param::Tone1,
        offset: 12,
        width: FIELD_WIDTH,
    },
    PackField {
        param: Param::Decay1,
        offset: 18,
        width: FIELD_WIDTH,
    },
    PackField {
        param: Param::Blend,
        offset: 24,
        width: FIELD_WIDTH,
    },
];

/// The six editable values of the voice: tone and decay per channel, plus
/// the global blend. All values stay in `0..=MAX_PARAM`; out-of-range edits
/// clamp at the boundary, never wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    pub tone: [i32; 2],
    pub decay: [i32; 2],
    pub blend: i32,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            tone: [32, 55],
            decay: [32, 16],
            blend: 0,
        }
    }
}

impl Params {
    pub fn get(&self, param: Param) -> i32 {
        match param {
            Param::Tone0 => self.tone[0],
            Param::Decay0 => self.decay[0],
            Param::Tone1 => self.tone[1],
            Param::Decay1 => self.decay[1],
            Param::Blend => self.blend,
        }
    }

    pub fn set(&mut self, param: Param, value: i32) {
        let value = value.clamp(0, MAX_PARAM);
        match param {
            Param::Tone0 => self.tone[0] = value,
            Param::Decay0 => self.decay[0] = value,
            Param::Tone1 => self.tone[1] = value,
            Param::Decay1 => self.decay[1] = value,
            Param::Blend => self.blend = value,
        }
    }

    /// Relative edit, clamped into range.
    pub fn nudge(&mut self, param: Param, delta: i32) {
        self.set(param, self.get(param) + delta);
    }

    /// Pack all parameters into the 30-bit preset word.
    pub fn pack(&self) -> u32 {
        PACK_FIELDS.iter().fold(0, |data, field| {
            let mask = (1 << field.width) - 1;
            data | ((self.get(field.param) as u32 & mask) << field.offset)
        })
    }

    /// Decode a preset word. Every 6-bit pattern is a valid parameter value,
    /// so this cannot fail.
    pub fn unpack(data: u32) -> Self {
        let mut params = Self::default();
        for field in &PACK_FIELDS {
            let mask = (1 << field.width) - 1;
            params.set(field.param, ((data >> field.offset) & mask) as i32);
        }
        params
    }
}
