// Code generated by `expo-table-gen 3`. DO NOT EDIT.

//! Mantissa thresholds for scale 3.

/// Entry `k` is the 52-bit significand of the smallest double not less than `2^(k/8)`.
pub(super) static THRESHOLDS: [u64; 8] = [
    0x0000000000000, // 2^(0/8) == 1
    0x172b83c7d517b, // 2^(1/8) == 1.0905077326652577
    0x306fe0a31b716, // 2^(2/8) == 1.1892071150027212
    0x4bfdad5362a28, // 2^(3/8) == 1.2968395546510099
    0x6a09e667f3bcd, // 2^(4/8) == 1.4142135623730951
    0x8ace5422aa0dc, // 2^(5/8) == 1.542210825407941
    0xae89f995ad3ae, // 2^(6/8) == 1.6817928305074292
    0xd5818dcfba488, // 2^(7/8) == 1.8340080864093427
];
