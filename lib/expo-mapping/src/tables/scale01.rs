// Code generated by `expo-table-gen 1`. DO NOT EDIT.

//! Mantissa thresholds for scale 1.

/// Entry `k` is the 52-bit significand of the smallest double not less than `2^(k/2)`.
pub(super) static THRESHOLDS: [u64; 2] = [
    0x0000000000000, // 2^(0/2) == 1
    0x6a09e667f3bcd, // 2^(1/2) == 1.4142135623730951
];
