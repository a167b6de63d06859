//! The code → name registry for top-level tags.

/// Sentinel name for every code the registry has no entry for.
pub const UNKNOWN_TAG_NAME: &str = "Unknown";

/// Number of distinct tag codes; the code field is 10 bits wide.
pub const TAG_CODE_COUNT: usize = 1024;

/// Immutable display-name table covering the full 10-bit code domain.
///
/// Built once at startup and shared by reference with the walker; the lookup
/// is total, so resolving a name can never fail.
pub struct TagTypes {
    names: [&'static str; TAG_CODE_COUNT],
}

impl TagTypes {
    pub fn new() -> Self {
        let mut names = [UNKNOWN_TAG_NAME; TAG_CODE_COUNT];
        names[1] = "End";
        names[2] = "DefineShape";
        names[9] = "SetBackgroundColor";
        names[20] = "DefineBitsLossless";
        names[22] = "DefineShape2";
        names[32] = "DefineShape3";
        names[33] = "DefineText2";
        names[34] = "DefineButton2";
        names[36] = "DefineBitsLossless2";
        names[37] = "DefineEditText";
        names[39] = "DefineSprite";
        names[43] = "FrameLabel";
        names[56] = "ExportAssets";
        names[65] = "ScriptLimits";
        names[69] = "FileAttributes";
        names[73] = "DefineFontAlignZones";
        names[74] = "CSMTextSettings";
        names[75] = "DefineFont3";
        names[76] = "SymbolClass";
        names[77] = "Metadata";
        names[78] = "DefineScalingGrid";
        names[82] = "DoABC";
        names[83] = "DefineShape4";
        names[88] = "DefineFontName";
        Self { names }
    }

    /// Resolve a tag code to its display name. Total over the 10-bit domain;
    /// the code is masked down so an out-of-range value cannot panic.
    pub fn name_of(&self, code: u16) -> &'static str {
        self.names[usize::from(code) & (TAG_CODE_COUNT - 1)]
    }
}

impl Default for TagTypes {
    fn default() -> Self {
        Self::new()
    }
}
