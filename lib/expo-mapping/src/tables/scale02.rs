// Code generated by `expo-table-gen 2`. DO NOT EDIT.

//! Mantissa thresholds for scale 2.

/// Entry `k` is the 52-bit significand of the smallest double not less than `2^(k/4)`.
pub(super) static THRESHOLDS: [u64; 4] = [
    0x0000000000000, // 2^(0/4) == 1
    0x306fe0a31b716, // 2^(1/4) == 1.1892071150027212
    0x6a09e667f3bcd, // 2^(2/4) == 1.4142135623730951
    0xae89f995ad3ae, // 2^(3/4) == 1.6817928305074292
];
