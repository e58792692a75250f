//! Datasets used by the demos
//!
//! Small published tables, embedded so every demo runs without files.

/// Red cell folate (µg/l) in three groups of cardiac bypass patients
/// given different ventilation, Altman table 9.10
///
/// Group I: 50% N2O and 50% O2 for 24 hours; group II: 50% N2O and 50% O2
/// during the operation only; group III: 35-50% O2 for 24 hours.
pub const FOLATE_GROUPS: [&[f64]; 3] = [
    &[243.0, 251.0, 275.0, 291.0, 347.0, 354.0, 380.0, 392.0],
    &[206.0, 210.0, 226.0, 249.0, 255.0, 273.0, 285.0, 295.0, 309.0],
    &[241.0, 258.0, 270.0, 293.0, 328.0],
];

/// Daily energy intake (kJ) of 11 women before menstruation, Altman table 9.3
pub const ENERGY_INTAKE_PRE: [f64; 11] = [
    5260.0, 5470.0, 5640.0, 6180.0, 6390.0, 6515.0, 6805.0, 7515.0, 7515.0, 8230.0, 8770.0,
];

/// Daily energy intake (kJ) of the same women after menstruation
pub const ENERGY_INTAKE_POST: [f64; 11] = [
    3910.0, 4220.0, 3885.0, 5160.0, 5645.0, 4680.0, 5265.0, 5975.0, 6790.0, 6900.0, 7335.0,
];

/// Recommended daily energy intake (kJ)
pub const RECOMMENDED_INTAKE: f64 = 7725.0;

/// 24 hour total energy expenditure (MJ/day) of lean women, Altman table 9.4
pub const EXPENDITURE_LEAN: [f64; 13] = [
    6.13, 7.05, 7.48, 7.48, 7.53, 7.58, 7.90, 8.08, 8.09, 8.11, 8.40, 10.15, 10.88,
];

/// 24 hour total energy expenditure (MJ/day) of obese women
pub const EXPENDITURE_OBESE: [f64; 9] = [8.79, 9.19, 9.21, 9.68, 9.69, 9.97, 11.51, 11.85, 12.79];

/// Fasting blood glucose (mmol/l) of 24 type 1 diabetic patients,
/// Altman table 11.6
pub const GLUCOSE: [f64; 24] = [
    15.3, 10.8, 8.1, 19.5, 7.2, 5.3, 9.3, 11.1, 7.5, 12.2, 6.7, 5.2, 19.0, 15.1, 6.7, 8.6, 4.2,
    10.3, 12.5, 16.1, 13.3, 4.9, 8.8, 9.5,
];

/// Mean circumferential shortening velocity (%/s) of the same patients;
/// one value is missing
pub const SHORTENING_VELOCITY: [f64; 24] = [
    1.76,
    1.34,
    1.27,
    1.47,
    1.27,
    1.49,
    1.31,
    1.09,
    1.18,
    1.22,
    1.25,
    1.19,
    1.95,
    1.28,
    1.52,
    f64::NAN,
    1.12,
    1.37,
    1.19,
    1.05,
    1.32,
    1.03,
    1.12,
    1.70,
];
