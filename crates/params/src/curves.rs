//! Short Weierstrass curve presets: y² = x³ + ax + b over 𝔽ₚ

/// Parameters of a curve together with a chosen base point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveParams {
    /// Preset name
    pub name: &'static str,
    /// The 'a' coefficient
    pub a: i64,
    /// The 'b' coefficient
    pub b: i64,
    /// The prime field modulus
    pub p: i64,
    /// Base point x-coordinate
    pub g_x: i64,
    /// Base point y-coordinate
    pub g_y: i64,
    /// Order of the base point, when known
    pub order: Option<u64>,
}

/// y² = x³ + 7 over 𝔽₁₇ with base point (8, 3).
///
/// The curve has 18 points; the base point generates a subgroup of order 6
/// that contains the 2-torsion point (3, 0).
pub const TOY_K7_P17: CurveParams = CurveParams {
    name: "toy-k7-p17",
    a: 0,
    b: 7,
    p: 17,
    g_x: 8,
    g_y: 3,
    order: Some(6),
};

/// y² = x³ + 2x + 2 over 𝔽₁₇ with base point (5, 1).
///
/// The group has prime order 19, so every finite point generates it.
pub const PAAR_P17: CurveParams = CurveParams {
    name: "paar-p17",
    a: 2,
    b: 2,
    p: 17,
    g_x: 5,
    g_y: 1,
    order: Some(19),
};

/// y² = x³ + 7 over the Mersenne prime 2⁶¹ − 1 with base point (1, 2³²).
///
/// (2³²)² = 2⁶⁴ ≡ 8 = 1³ + 7. The base point order is not tabulated.
pub const M61_K7: CurveParams = CurveParams {
    name: "m61-k7",
    a: 0,
    b: 7,
    p: 2_305_843_009_213_693_951,
    g_x: 1,
    g_y: 4_294_967_296,
    order: None,
};

/// All presets, smallest field first
pub const ALL: [CurveParams; 3] = [TOY_K7_P17, PAAR_P17, M61_K7];
