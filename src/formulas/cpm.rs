use crate::error::{LeagueRankError, LrResult};

/// Half-level index of level 1.0 (indices are `level * 2` for exact stepping).
pub const MIN_LEVEL_IDX: u16 = 2;
/// Half-level index of level 51.0, the last table entry.
pub const MAX_LEVEL_IDX: u16 = 102;

/// CP multipliers for levels 1.0..=51.0 in half-level steps, the published
/// game-master constants. Entry `i` holds the multiplier for level
/// `(i + 2) / 2`.
const CPM_TABLE: [f64; 101] = [
    0.0939999967813492,
    0.135137432089339,
    0.166397869586945,
    0.192650913540483,
    0.215732470154762,
    0.236572651424822,
    0.255720049142838,
    0.273530372106572,
    0.290249884128571,
    0.306057381335773,
    0.321087598800659,
    0.335445031996451,
    0.349212676286697,
    0.362457736609939,
    0.375235587358475,
    0.387592407713878,
    0.399567276239395,
    0.41119354951725,
    0.422500014305115,
    0.432926420512509,
    0.443107545375824,
    0.453059948689046,
    0.46279838681221,
    0.472336077786704,
    0.481684952974319,
    0.490855810259008,
    0.499858438968658,
    0.508701756943992,
    0.517393946647644,
    0.525942508771329,
    0.534354329109192,
    0.542635762230353,
    0.550792694091797,
    0.558830599438087,
    0.566754519939423,
    0.574569148039264,
    0.582278907299042,
    0.589887911977703,
    0.597400009632111,
    0.604823657502079,
    0.61215728521347,
    0.61940411056605,
    0.626567125320435,
    0.633649181622743,
    0.6406529545784,
    0.647580963301656,
    0.654435634613037,
    0.661219263506722,
    0.667934000492096,
    0.674581899290818,
    0.681164920330048,
    0.687684905887771,
    0.694143652915955,
    0.700542893277978,
    0.706884205341339,
    0.713169102333341,
    0.719399094581604,
    0.725575616972598,
    0.731700003147125,
    0.734741011137376,
    0.737769484519958,
    0.740785574597326,
    0.743789434432983,
    0.746781208702482,
    0.749761044979095,
    0.752729105305821,
    0.75568550825119,
    0.758630366519684,
    0.761563837528228,
    0.764486065778732,
    0.767397165298462,
    0.77029727397159,
    0.773186504840851,
    0.776064945942412,
    0.778932750225067,
    0.781790064808426,
    0.784637034302235,
    0.787473608513275,
    0.790300011634827,
    0.792803950958807,
    0.795300006866455,
    0.79780392148697,
    0.800300002098084,
    0.802803892322847,
    0.805300056934357,
    0.807803853340944,
    0.81029999256134,
    0.812803784580231,
    0.815299987792969,
    0.817803780674934,
    0.820299983024597,
    0.822803777550292,
    0.825299978256226,
    0.827803771548384,
    0.830299973487854,
    0.832803745716045,
    0.835300028324127,
    0.837803755931569,
    0.840300023555756,
    0.842803729034748,
    0.845300018787384,
];

/// Multiplier for an exact half-level index.
pub fn multiplier(level_idx: u16) -> LrResult<f64> {
    if !(MIN_LEVEL_IDX..=MAX_LEVEL_IDX).contains(&level_idx) {
        return Err(LeagueRankError::UnknownLevel {
            level: level_idx as f64 / 2.0,
            index: level_idx as i64,
        });
    }
    Ok(CPM_TABLE[(level_idx - MIN_LEVEL_IDX) as usize])
}

pub fn level_from_idx(level_idx: u16) -> f64 {
    level_idx as f64 / 2.0
}

/// Normalizes a fractional level onto the half-level grid and validates it
/// against the table (e.g. 34.499999 -> index 69, level 34.5).
pub fn index_for_level(level: f64) -> LrResult<u16> {
    let idx = (level * 2.0).round();
    if idx < MIN_LEVEL_IDX as f64 || idx > MAX_LEVEL_IDX as f64 {
        return Err(LeagueRankError::UnknownLevel {
            level,
            index: idx as i64,
        });
    }
    Ok(idx as u16)
}
