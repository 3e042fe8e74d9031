// Code generated by `expo-table-gen 7`. DO NOT EDIT.

//! Mantissa thresholds for scale 7.

/// Entry `k` is the 52-bit significand of the smallest double not less than `2^(k/128)`.
pub(super) static THRESHOLDS: [u64; 128] = [
    0x0000000000000, // 2^(0/128) == 1
    0x0163da9fb3336, // 2^(1/128) == 1.005429901112803
    0x02c9a3e778061, // 2^(2/128) == 1.0108892860517005
    0x04315e86e7f85, // 2^(3/128) == 1.016378314910953
    0x059b0d3158575, // 2^(4/128) == 1.0218971486541168
    0x0706b29ddf6de, // 2^(5/128) == 1.0274459491187637
    0x0874518759bc9, // 2^(6/128) == 1.0330248790212286
    0x09e3ecac6f384, // 2^(7/128) == 1.038634101961379
    0x0b5586cf98910, // 2^(8/128) == 1.044273782427414
    0x0cc922b7247f8, // 2^(9/128) == 1.0499440858006874
    0x0e3ec32d3d1a3, // 2^(10/128) == 1.0556451783605574
    0x0fb66affed31b, // 2^(11/128) == 1.061377227289262
    0x11301d0125b51, // 2^(12/128) == 1.0671404006768237
    0x12abdc06c31cc, // 2^(13/128) == 1.0729348675259756
    0x1429aaea92de0, // 2^(14/128) == 1.0787607977571199
    0x15a98c8a58e52, // 2^(15/128) == 1.0846183622133094
    0x172b83c7d517b, // 2^(16/128) == 1.0905077326652577
    0x18af9388c8dea, // 2^(17/128) == 1.0964290818163769
    0x1a35beb6fcb76, // 2^(18/128) == 1.1023825833078411
    0x1bbe084045cd4, // 2^(19/128) == 1.1083684117236787
    0x1d4873168b9ab, // 2^(20/128) == 1.1143867425958927
    0x1ed5022fcd91d, // 2^(21/128) == 1.1204377524096067
    0x2063b88628cd7, // 2^(22/128) == 1.126521618608242
    0x21f49917ddc97, // 2^(23/128) == 1.1326385195987194
    0x2387a6e756239, // 2^(24/128) == 1.1387886347566918
    0x251ce4fb2a640, // 2^(25/128) == 1.1449721444318044
    0x26b4565e27cde, // 2^(26/128) == 1.151189229952983
    0x284dfe1f56381, // 2^(27/128) == 1.1574400736337511
    0x29e9df51fdee2, // 2^(28/128) == 1.1637248587775777
    0x2b87fd0dad990, // 2^(29/128) == 1.1700437696832502
    0x2d285a6e4030c, // 2^(30/128) == 1.1763969916502814
    0x2ecafa93e2f57, // 2^(31/128) == 1.1827847109843412
    0x306fe0a31b716, // 2^(32/128) == 1.1892071150027212
    0x32170fc4cd832, // 2^(33/128) == 1.1956643920398276
    0x33c08b2641700, // 2^(34/128) == 1.2021567314527033
    0x356c55f929ff1, // 2^(35/128) == 1.2086843236265816
    0x371a7373aa9cb, // 2^(36/128) == 1.215247359980469
    0x38cae6d05d866, // 2^(37/128) == 1.2218460329727576
    0x3a7db34e59ff7, // 2^(38/128) == 1.22848053610687
    0x3c32dc313a8e5, // 2^(39/128) == 1.2351510639369334
    0x3dea64c123423, // 2^(40/128) == 1.2418578120734842
    0x3fa4504ac801c, // 2^(41/128) == 1.2486009771892048
    0x4160a21f72e2a, // 2^(42/128) == 1.255380757024691
    0x431f5d950a897, // 2^(43/128) == 1.2621973503942507
    0x44e086061892e, // 2^(44/128) == 1.2690509571917334
    0x46a41ed1d0058, // 2^(45/128) == 1.2759417783963922
    0x486a2b5c13cd1, // 2^(46/128) == 1.2828700160787785
    0x4a32af0d7d3df, // 2^(47/128) == 1.289835873406666
    0x4bfdad5362a28, // 2^(48/128) == 1.2968395546510099
    0x4dcb299fddd0e, // 2^(49/128) == 1.303881265191936
    0x4f9b2769d2ca7, // 2^(50/128) == 1.3109612115247644
    0x516daa2cf6642, // 2^(51/128) == 1.318079601266064
    0x5342b569d4f82, // 2^(52/128) == 1.3252366431597413
    0x551a4ca5d920f, // 2^(53/128) == 1.3324325470831615
    0x56f4736b527db, // 2^(54/128) == 1.3396675240533031
    0x58d12d497c7fe, // 2^(55/128) == 1.346941786232946
    0x5ab07dd48542a, // 2^(56/128) == 1.3542555469368929
    0x5c9268a5946b8, // 2^(57/128) == 1.361609020638225
    0x5e76f15ad2149, // 2^(58/128) == 1.3690024229745907
    0x605e1b976dc09, // 2^(59/128) == 1.3764359707545302
    0x6247eb03a5585, // 2^(60/128) == 1.383909881963832
    0x6434634ccc320, // 2^(61/128) == 1.3914243757719262
    0x6623882552225, // 2^(62/128) == 1.3989796725383112
    0x68155d44ca974, // 2^(63/128) == 1.4065759938190157
    0x6a09e667f3bcd, // 2^(64/128) == 1.4142135623730951
    0x6c012750bdabf, // 2^(65/128) == 1.4218926021691656
    0x6dfb23c651a2f, // 2^(66/128) == 1.42961333839197
    0x6ff7df9519484, // 2^(67/128) == 1.4373759974489824
    0x71f75e8ec5f74, // 2^(68/128) == 1.4451808069770467
    0x73f9a48a58174, // 2^(69/128) == 1.4530279958490526
    0x75feb564267c9, // 2^(70/128) == 1.460917794180647
    0x780694fde5d40, // 2^(71/128) == 1.468850433336982
    0x7a11473eb0187, // 2^(72/128) == 1.4768261459394993
    0x7c1ed0130c133, // 2^(73/128) == 1.4848451658727526
    0x7e2f336cf4e63, // 2^(74/128) == 1.492907728291265
    0x80427543e1a12, // 2^(75/128) == 1.5010140696264256
    0x82589994cce13, // 2^(76/128) == 1.5091644275934228
    0x8471a4623c7ad, // 2^(77/128) == 1.5173590411982147
    0x868d99b4492ed, // 2^(78/128) == 1.5255981507445384
    0x88ac7d98a669a, // 2^(79/128) == 1.5338819978409561
    0x8ace5422aa0dc, // 2^(80/128) == 1.542210825407941
    0x8cf3216b5448c, // 2^(81/128) == 1.550584877685
    0x8f1ae99157737, // 2^(82/128) == 1.5590044002378372
    0x9145b0b91ffc6, // 2^(83/128) == 1.567469639965553
    0x93737b0cdc5e5, // 2^(84/128) == 1.5759808451078865
    0x95a44cbc8520f, // 2^(85/128) == 1.5845382652524937
    0x97d829fde4e50, // 2^(86/128) == 1.593142151342267
    0x9a0f170ca07ba, // 2^(87/128) == 1.6017927556826934
    0x9c49182a3f091, // 2^(88/128) == 1.6104903319492545
    0x9e86319e32324, // 2^(89/128) == 1.619235135194864
    0xa0c667b5de565, // 2^(90/128) == 1.6280274218573478
    0xa309bec4a2d34, // 2^(91/128) == 1.6368674497669646
    0xa5503b23e255d, // 2^(92/128) == 1.645755478153965
    0xa799e1330b359, // 2^(93/128) == 1.6546917676561945
    0xa9e6b5579fdc0, // 2^(94/128) == 1.6636765803267366
    0xac36bbfd3f37a, // 2^(95/128) == 1.6727101796415966
    0xae89f995ad3ae, // 2^(96/128) == 1.6817928305074292
    0xb0e07298db666, // 2^(97/128) == 1.6909247992693053
    0xb33a2b84f15fb, // 2^(98/128) == 1.7001063537185235
    0xb59728de5593a, // 2^(99/128) == 1.709337763100463
    0xb7f76f2fb5e47, // 2^(100/128) == 1.718619298122478
    0xba5b030a1064a, // 2^(101/128) == 1.7279512309618377
    0xbcc1e904bc1d3, // 2^(102/128) == 1.7373338352737064
    0xbf2c25bd71e09, // 2^(103/128) == 1.746767386199169
    0xc199bdd85529d, // 2^(104/128) == 1.7562521603732997
    0xc40ab5fffd07b, // 2^(105/128) == 1.765788435933273
    0xc67f12e57d14c, // 2^(106/128) == 1.7753764925265214
    0xc8f6d9406e7b6, // 2^(107/128) == 1.7850166113189352
    0xcb720dcef906a, // 2^(108/128) == 1.7947090750031074
    0xcdf0b555dc3fa, // 2^(109/128) == 1.804454167806624
    0xd072d4a07897c, // 2^(110/128) == 1.8142521755003989
    0xd2f87080d89f2, // 2^(111/128) == 1.8241033854070534
    0xd5818dcfba488, // 2^(112/128) == 1.8340080864093427
    0xd80e316c98398, // 2^(113/128) == 1.843966568958626
    0xda9e603db3286, // 2^(114/128) == 1.8539791250833857
    0xdd321f301b461, // 2^(115/128) == 1.8640460483977892
    0xdfc97337b9b5f, // 2^(116/128) == 1.8741676341103
    0xe264614f5a129, // 2^(117/128) == 1.8843441790323345
    0xe502ee78b3ff7, // 2^(118/128) == 1.8945759815869658
    0xe7a51fbc74c84, // 2^(119/128) == 1.9048633418176744
    0xea4afa2a490da, // 2^(120/128) == 1.9152065613971474
    0xecf482d8e67f1, // 2^(121/128) == 1.925605943636125
    0xefa1bee615a28, // 2^(122/128) == 1.9360617934922946
    0xf252b376bba98, // 2^(123/128) == 1.9465744175792334
    0xf50765b6e4541, // 2^(124/128) == 1.9571441241754004
    0xf7bfdad9cbe14, // 2^(125/128) == 1.9677712232331759
    0xfa7c1819e90d9, // 2^(126/128) == 1.9784560263879511
    0xfd3c22b8f71f2, // 2^(127/128) == 1.9891988469672666
];
