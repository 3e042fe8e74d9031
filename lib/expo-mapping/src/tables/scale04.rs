// Code generated by `expo-table-gen 4`. DO NOT EDIT.

//! Mantissa thresholds for scale 4.

/// Entry `k` is the 52-bit significand of the smallest double not less than `2^(k/16)`.
pub(super) static THRESHOLDS: [u64; 16] = [
    0x0000000000000, // 2^(0/16) == 1
    0x0b5586cf98910, // 2^(1/16) == 1.044273782427414
    0x172b83c7d517b, // 2^(2/16) == 1.0905077326652577
    0x2387a6e756239, // 2^(3/16) == 1.1387886347566918
    0x306fe0a31b716, // 2^(4/16) == 1.1892071150027212
    0x3dea64c123423, // 2^(5/16) == 1.2418578120734842
    0x4bfdad5362a28, // 2^(6/16) == 1.2968395546510099
    0x5ab07dd48542a, // 2^(7/16) == 1.3542555469368929
    0x6a09e667f3bcd, // 2^(8/16) == 1.4142135623730951
    0x7a11473eb0187, // 2^(9/16) == 1.4768261459394993
    0x8ace5422aa0dc, // 2^(10/16) == 1.542210825407941
    0x9c49182a3f091, // 2^(11/16) == 1.6104903319492545
    0xae89f995ad3ae, // 2^(12/16) == 1.6817928305074292
    0xc199bdd85529d, // 2^(13/16) == 1.7562521603732997
    0xd5818dcfba488, // 2^(14/16) == 1.8340080864093427
    0xea4afa2a490da, // 2^(15/16) == 1.9152065613971474
];
