// Code generated by `expo-table-gen 6`. DO NOT EDIT.

//! Mantissa thresholds for scale 6.

/// Entry `k` is the 52-bit significand of the smallest double not less than `2^(k/64)`.
pub(super) static THRESHOLDS: [u64; 64] = [
    0x0000000000000, // 2^(0/64) == 1
    0x02c9a3e778061, // 2^(1/64) == 1.0108892860517005
    0x059b0d3158575, // 2^(2/64) == 1.0218971486541168
    0x0874518759bc9, // 2^(3/64) == 1.0330248790212286
    0x0b5586cf98910, // 2^(4/64) == 1.044273782427414
    0x0e3ec32d3d1a3, // 2^(5/64) == 1.0556451783605574
    0x11301d0125b51, // 2^(6/64) == 1.0671404006768237
    0x1429aaea92de0, // 2^(7/64) == 1.0787607977571199
    0x172b83c7d517b, // 2^(8/64) == 1.0905077326652577
    0x1a35beb6fcb76, // 2^(9/64) == 1.1023825833078411
    0x1d4873168b9ab, // 2^(10/64) == 1.1143867425958927
    0x2063b88628cd7, // 2^(11/64) == 1.126521618608242
    0x2387a6e756239, // 2^(12/64) == 1.1387886347566918
    0x26b4565e27cde, // 2^(13/64) == 1.151189229952983
    0x29e9df51fdee2, // 2^(14/64) == 1.1637248587775777
    0x2d285a6e4030c, // 2^(15/64) == 1.1763969916502814
    0x306fe0a31b716, // 2^(16/64) == 1.1892071150027212
    0x33c08b2641700, // 2^(17/64) == 1.2021567314527033
    0x371a7373aa9cb, // 2^(18/64) == 1.215247359980469
    0x3a7db34e59ff7, // 2^(19/64) == 1.22848053610687
    0x3dea64c123423, // 2^(20/64) == 1.2418578120734842
    0x4160a21f72e2a, // 2^(21/64) == 1.255380757024691
    0x44e086061892e, // 2^(22/64) == 1.2690509571917334
    0x486a2b5c13cd1, // 2^(23/64) == 1.2828700160787785
    0x4bfdad5362a28, // 2^(24/64) == 1.2968395546510099
    0x4f9b2769d2ca7, // 2^(25/64) == 1.3109612115247644
    0x5342b569d4f82, // 2^(26/64) == 1.3252366431597413
    0x56f4736b527db, // 2^(27/64) == 1.3396675240533031
    0x5ab07dd48542a, // 2^(28/64) == 1.3542555469368929
    0x5e76f15ad2149, // 2^(29/64) == 1.3690024229745907
    0x6247eb03a5585, // 2^(30/64) == 1.383909881963832
    0x6623882552225, // 2^(31/64) == 1.3989796725383112
    0x6a09e667f3bcd, // 2^(32/64) == 1.4142135623730951
    0x6dfb23c651a2f, // 2^(33/64) == 1.42961333839197
    0x71f75e8ec5f74, // 2^(34/64) == 1.4451808069770467
    0x75feb564267c9, // 2^(35/64) == 1.460917794180647
    0x7a11473eb0187, // 2^(36/64) == 1.4768261459394993
    0x7e2f336cf4e63, // 2^(37/64) == 1.492907728291265
    0x82589994cce13, // 2^(38/64) == 1.5091644275934228
    0x868d99b4492ed, // 2^(39/64) == 1.5255981507445384
    0x8ace5422aa0dc, // 2^(40/64) == 1.542210825407941
    0x8f1ae99157737, // 2^(41/64) == 1.5590044002378372
    0x93737b0cdc5e5, // 2^(42/64) == 1.5759808451078865
    0x97d829fde4e50, // 2^(43/64) == 1.593142151342267
    0x9c49182a3f091, // 2^(44/64) == 1.6104903319492545
    0xa0c667b5de565, // 2^(45/64) == 1.6280274218573478
    0xa5503b23e255d, // 2^(46/64) == 1.645755478153965
    0xa9e6b5579fdc0, // 2^(47/64) == 1.6636765803267366
    0xae89f995ad3ae, // 2^(48/64) == 1.6817928305074292
    0xb33a2b84f15fb, // 2^(49/64) == 1.7001063537185235
    0xb7f76f2fb5e47, // 2^(50/64) == 1.718619298122478
    0xbcc1e904bc1d3, // 2^(51/64) == 1.7373338352737064
    0xc199bdd85529d, // 2^(52/64) == 1.7562521603732997
    0xc67f12e57d14c, // 2^(53/64) == 1.7753764925265214
    0xcb720dcef906a, // 2^(54/64) == 1.7947090750031074
    0xd072d4a07897c, // 2^(55/64) == 1.8142521755003989
    0xd5818dcfba488, // 2^(56/64) == 1.8340080864093427
    0xda9e603db3286, // 2^(57/64) == 1.8539791250833857
    0xdfc97337b9b5f, // 2^(58/64) == 1.8741676341103
    0xe502ee78b3ff7, // 2^(59/64) == 1.8945759815869658
    0xea4afa2a490da, // 2^(60/64) == 1.9152065613971474
    0xefa1bee615a28, // 2^(61/64) == 1.9360617934922946
    0xf50765b6e4541, // 2^(62/64) == 1.9571441241754004
    0xfa7c1819e90d9, // 2^(63/64) == 1.9784560263879511
];
