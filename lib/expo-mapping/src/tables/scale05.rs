// Code generated by `expo-table-gen 5`. DO NOT EDIT.

//! Mantissa thresholds for scale 5.

/// Entry `k` is the 52-bit significand of the smallest double not less than `2^(k/32)`.
pub(super) static THRESHOLDS: [u64; 32] = [
    0x0000000000000, // 2^(0/32) == 1
    0x059b0d3158575, // 2^(1/32) == 1.0218971486541168
    0x0b5586cf98910, // 2^(2/32) == 1.044273782427414
    0x11301d0125b51, // 2^(3/32) == 1.0671404006768237
    0x172b83c7d517b, // 2^(4/32) == 1.0905077326652577
    0x1d4873168b9ab, // 2^(5/32) == 1.1143867425958927
    0x2387a6e756239, // 2^(6/32) == 1.1387886347566918
    0x29e9df51fdee2, // 2^(7/32) == 1.1637248587775777
    0x306fe0a31b716, // 2^(8/32) == 1.1892071150027212
    0x371a7373aa9cb, // 2^(9/32) == 1.215247359980469
    0x3dea64c123423, // 2^(10/32) == 1.2418578120734842
    0x44e086061892e, // 2^(11/32) == 1.2690509571917334
    0x4bfdad5362a28, // 2^(12/32) == 1.2968395546510099
    0x5342b569d4f82, // 2^(13/32) == 1.3252366431597413
    0x5ab07dd48542a, // 2^(14/32) == 1.3542555469368929
    0x6247eb03a5585, // 2^(15/32) == 1.383909881963832
    0x6a09e667f3bcd, // 2^(16/32) == 1.4142135623730951
    0x71f75e8ec5f74, // 2^(17/32) == 1.4451808069770467
    0x7a11473eb0187, // 2^(18/32) == 1.4768261459394993
    0x82589994cce13, // 2^(19/32) == 1.5091644275934228
    0x8ace5422aa0dc, // 2^(20/32) == 1.542210825407941
    0x93737b0cdc5e5, // 2^(21/32) == 1.5759808451078865
    0x9c49182a3f091, // 2^(22/32) == 1.6104903319492545
    0xa5503b23e255d, // 2^(23/32) == 1.645755478153965
    0xae89f995ad3ae, // 2^(24/32) == 1.6817928305074292
    0xb7f76f2fb5e47, // 2^(25/32) == 1.718619298122478
    0xc199bdd85529d, // 2^(26/32) == 1.7562521603732997
    0xcb720dcef906a, // 2^(27/32) == 1.7947090750031074
    0xd5818dcfba488, // 2^(28/32) == 1.8340080864093427
    0xdfc97337b9b5f, // 2^(29/32) == 1.8741676341103
    0xea4afa2a490da, // 2^(30/32) == 1.9152065613971474
    0xf50765b6e4541, // 2^(31/32) == 1.9571441241754004
];
