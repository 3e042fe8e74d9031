// Code generated by `expo-table-gen 9`. DO NOT EDIT.

//! Mantissa thresholds for scale 9.

/// Entry `k` is the 52-bit significand of the smallest double not less than `2^(k/512)`.
pub(super) static THRESHOLDS: [u64; 512] = [
    0x0000000000000, // 2^(0/512) == 1
    0x0058c86da1c0a, // 2^(1/512) == 1.0013547198921082
    0x00b1afa5abcbf, // 2^(2/512) == 1.0027112750502025
    0x010ab5b2cbd12, // 2^(3/512) == 1.0040696679605543
    0x0163da9fb3336, // 2^(4/512) == 1.005429901112803
    0x01bd1e77170b5, // 2^(5/512) == 1.006791976999961
    0x02168143b0281, // 2^(6/512) == 1.0081558981184175
    0x027003103b10e, // 2^(7/512) == 1.0095216669679448
    0x02c9a3e778061, // 2^(8/512) == 1.0108892860517005
    0x032363d42b028, // 2^(9/512) == 1.0122587578762339
    0x037d42e11bbcd, // 2^(10/512) == 1.0136300849514897
    0x03d7411915a8b, // 2^(11/512) == 1.0150032697908127
    0x04315e86e7f85, // 2^(12/512) == 1.016378314910953
    0x048b9b35659d9, // 2^(13/512) == 1.0177552228320705
    0x04e5f72f654b2, // 2^(14/512) == 1.0191339960777381
    0x0540727fc1762, // 2^(15/512) == 1.0205146371749483
    0x059b0d3158575, // 2^(16/512) == 1.0218971486541168
    0x05f5c74f0bec3, // 2^(17/512) == 1.0232815330490872
    0x0650a0e3c1f89, // 2^(18/512) == 1.0246677928971357
    0x06ab99fa6407c, // 2^(19/512) == 1.026055930738976
    0x0706b29ddf6de, // 2^(20/512) == 1.0274459491187637
    0x0761ead925493, // 2^(21/512) == 1.028837850584101
    0x07bd42b72a837, // 2^(22/512) == 1.0302316376860412
    0x0818ba42e7d30, // 2^(23/512) == 1.0316273129790936
    0x0874518759bc9, // 2^(24/512) == 1.0330248790212286
    0x08d0088f80940, // 2^(25/512) == 1.0344243383738814
    0x092bdf66607e0, // 2^(26/512) == 1.0358256936019572
    0x0987d61701716, // 2^(27/512) == 1.0372289472738365
    0x09e3ecac6f384, // 2^(28/512) == 1.038634101961379
    0x0a402331b9716, // 2^(29/512) == 1.040041160239928
    0x0a9c79b1f391a, // 2^(30/512) == 1.0414501246883163
    0x0af8f03834e53, // 2^(31/512) == 1.04286099788887
    0x0b5586cf98910, // 2^(32/512) == 1.044273782427414
    0x0bb23d833d93f, // 2^(33/512) == 1.0456884808932754
    0x0c0f145e46c86, // 2^(34/512) == 1.04710509587929
    0x0c6c0b6bdae53, // 2^(35/512) == 1.0485236299818055
    0x0cc922b7247f8, // 2^(36/512) == 1.0499440858006874
    0x0d265a4b520ba, // 2^(37/512) == 1.051366465939323
    0x0d83b23395dec, // 2^(38/512) == 1.0527907730046264
    0x0de12a7b26301, // 2^(39/512) == 1.0542170096070438
    0x0e3ec32d3d1a3, // 2^(40/512) == 1.0556451783605574
    0x0e9c7c55189c7, // 2^(41/512) == 1.0570752818826905
    0x0efa55fdfa9c5, // 2^(42/512) == 1.0585073227945128
    0x0f58503328e6d, // 2^(43/512) == 1.0599413037206447
    0x0fb66affed31b, // 2^(44/512) == 1.061377227289262
    0x1014a66f951cf, // 2^(45/512) == 1.0628150961321017
    0x1073028d7233f, // 2^(46/512) == 1.0642549128844647
    0x10d17f64d9ef2, // 2^(47/512) == 1.0656966801852232
    0x11301d0125b51, // 2^(48/512) == 1.0671404006768237
    0x118edb6db2dc1, // 2^(49/512) == 1.0685860770052928
    0x11edbab5e2ab6, // 2^(50/512) == 1.0700337118202419
    0x124cbae51a5c8, // 2^(51/512) == 1.071483307774871
    0x12abdc06c31cc, // 2^(52/512) == 1.0729348675259756
    0x130b1e264a0e9, // 2^(53/512) == 1.0743883937339496
    0x136a814f204ab, // 2^(54/512) == 1.075843889062791
    0x13ca058cbae1e, // 2^(55/512) == 1.0773013561801075
    0x1429aaea92de0, // 2^(56/512) == 1.0787607977571199
    0x1489717425438, // 2^(57/512) == 1.080222216468668
    0x14e95934f312e, // 2^(58/512) == 1.0816856149932152
    0x154962388149f, // 2^(59/512) == 1.083150996012854
    0x15a98c8a58e52, // 2^(60/512) == 1.0846183622133094
    0x1609d83606e12, // 2^(61/512) == 1.0860877162839455
    0x166a45471c3c3, // 2^(62/512) == 1.0875590609177699
    0x16cad3c92df74, // 2^(63/512) == 1.0890323988114377
    0x172b83c7d517b, // 2^(64/512) == 1.0905077326652577
    0x178c554eaea8a, // 2^(65/512) == 1.0919850651831973
    0x17ed48695bbc1, // 2^(66/512) == 1.093464399072886
    0x184e5d23816c9, // 2^(67/512) == 1.0949457370456221
    0x18af9388c8dea, // 2^(68/512) == 1.0964290818163769
    0x1910eba4df420, // 2^(69/512) == 1.0979144361037996
    0x1972658375d30, // 2^(70/512) == 1.0994018026302221
    0x19d4013041dc2, // 2^(71/512) == 1.1008911841216649
    0x1a35beb6fcb76, // 2^(72/512) == 1.1023825833078411
    0x1a979e2363cf9, // 2^(73/512) == 1.103876002922162
    0x1af99f8138a1d, // 2^(74/512) == 1.1053714457017414
    0x1b5bc2dc40bf1, // 2^(75/512) == 1.106868914387402
    0x1bbe084045cd4, // 2^(76/512) == 1.1083684117236787
    0x1c206fb915890, // 2^(77/512) == 1.1098699404588253
    0x1c82f95281c6c, // 2^(78/512) == 1.1113735033448178
    0x1ce5a51860746, // 2^(79/512) == 1.1128791031373608
    0x1d4873168b9ab, // 2^(80/512) == 1.1143867425958927
    0x1dab6358e15e8, // 2^(81/512) == 1.115896424483589
    0x1e0e75eb44027, // 2^(82/512) == 1.1174081515673693
    0x1e71aad999e83, // 2^(83/512) == 1.1189219266179016
    0x1ed5022fcd91d, // 2^(84/512) == 1.1204377524096067
    0x1f387bf9cda39, // 2^(85/512) == 1.1219556317206651
    0x1f9c18438ce4d, // 2^(86/512) == 1.12347556733302
    0x1fffd7190241f, // 2^(87/512) == 1.1249975620323835
    0x2063b88628cd7, // 2^(88/512) == 1.126521618608242
    0x20c7bc96ffc18, // 2^(89/512) == 1.1280477398538604
    0x212be3578a81a, // 2^(90/512) == 1.1295759285662883
    0x21902cd3d09b9, // 2^(91/512) == 1.1311061875463635
    0x21f49917ddc97, // 2^(92/512) == 1.1326385195987194
    0x2259282fc1f28, // 2^(93/512) == 1.1341729275317878
    0x22bdda27912d2, // 2^(94/512) == 1.1357094141578057
    0x2322af0b63c00, // 2^(95/512) == 1.1372479822928199
    0x2387a6e756239, // 2^(96/512) == 1.1387886347566918
    0x23ecc1c78903a, // 2^(97/512) == 1.1403313743731034
    0x2451ffb82140b, // 2^(98/512) == 1.1418762039695618
    0x24b760c547f16, // 2^(99/512) == 1.1434231263774044
    0x251ce4fb2a640, // 2^(100/512) == 1.1449721444318044
    0x25828c65fa200, // 2^(101/512) == 1.146523260971776
    0x25e85711ece76, // 2^(102/512) == 1.1480764788401792
    0x264e450b3cb82, // 2^(103/512) == 1.1496318008837254
    0x26b4565e27cde, // 2^(104/512) == 1.151189229952983
    0x271a8b16f0a30, // 2^(105/512) == 1.1527487689023808
    0x2780e341ddf2a, // 2^(106/512) == 1.1543104205902162
    0x27e75eeb3ab99, // 2^(107/512) == 1.1558741878786576
    0x284dfe1f56381, // 2^(108/512) == 1.1574400736337511
    0x28b4c0ea83f36, // 2^(109/512) == 1.159008080725426
    0x291ba7591bb70, // 2^(110/512) == 1.1605782120274988
    0x2982b17779966, // 2^(111/512) == 1.16215047041768
    0x29e9df51fdee2, // 2^(112/512) == 1.1637248587775777
    0x2a5130f50d65c, // 2^(113/512) == 1.1653013799927043
    0x2ab8a66d10f13, // 2^(114/512) == 1.1668800369524817
    0x2b203fc675d20, // 2^(115/512) == 1.1684608325502452
    0x2b87fd0dad990, // 2^(116/512) == 1.1700437696832502
    0x2befde4f2e281, // 2^(117/512) == 1.1716288512526776
    0x2c57e39771b2f, // 2^(118/512) == 1.1732160801636373
    0x2cc00cf2f6c18, // 2^(119/512) == 1.1748054593251762
    0x2d285a6e4030c, // 2^(120/512) == 1.1763969916502814
    0x2d90cc15d5347, // 2^(121/512) == 1.1779906800558864
    0x2df961f64158a, // 2^(122/512) == 1.179586527462876
    0x2e621c1c14834, // 2^(123/512) == 1.181184536796093
    0x2ecafa93e2f57, // 2^(124/512) == 1.1827847109843412
    0x2f33fd6a454d2, // 2^(125/512) == 1.184387052960393
    0x2f9d24abd886b, // 2^(126/512) == 1.1859915656609938
    0x300670653dfe5, // 2^(127/512) == 1.1875982520268675
    0x306fe0a31b716, // 2^(128/512) == 1.1892071150027212
    0x30d975721b005, // 2^(129/512) == 1.190818157537252
    0x31432edeeb2fe, // 2^(130/512) == 1.1924313825831514
    0x31ad0cf63eeac, // 2^(131/512) == 1.1940467930971108
    0x32170fc4cd832, // 2^(132/512) == 1.1956643920398276
    0x3281375752b40, // 2^(133/512) == 1.1972841823760092
    0x32eb83ba8ea32, // 2^(134/512) == 1.1989061670743806
    0x3355f4fb45e21, // 2^(135/512) == 1.2005303491076875
    0x33c08b2641700, // 2^(136/512) == 1.2021567314527033
    0x342b46484ebb4, // 2^(137/512) == 1.203785317090234
    0x3496266e3fa2d, // 2^(138/512) == 1.2054161090051239
    0x35012ba4ea77d, // 2^(139/512) == 1.2070491101862608
    0x356c55f929ff1, // 2^(140/512) == 1.2086843236265816
    0x35d7a577dd72c, // 2^(141/512) == 1.210321752323078
    0x36431a2de883b, // 2^(142/512) == 1.2119613992768012
    0x36aeb428335b5, // 2^(143/512) == 1.213603267492869
    0x371a7373aa9cb, // 2^(144/512) == 1.215247359980469
    0x3786581d3f669, // 2^(145/512) == 1.2168936797528664
    0x37f26231e754a, // 2^(146/512) == 1.2185422298274085
    0x385e91be9c812, // 2^(147/512) == 1.2201930132255296
    0x38cae6d05d866, // 2^(148/512) == 1.2218460329727576
    0x393761742d809, // 2^(149/512) == 1.2235012920987194
    0x39a401b7140ef, // 2^(150/512) == 1.2251587936371455
    0x3a10c7a61d55c, // 2^(151/512) == 1.2268185406258771
    0x3a7db34e59ff7, // 2^(152/512) == 1.22848053610687
    0x3aeac4bcdf3ea, // 2^(153/512) == 1.2301447831262018
    0x3b57fbfec6cf5, // 2^(154/512) == 1.231811284734076
    0x3bc559212ef89, // 2^(155/512) == 1.2334800439848286
    0x3c32dc313a8e5, // 2^(156/512) == 1.2351510639369334
    0x3ca0853c10f29, // 2^(157/512) == 1.2368243476530074
    0x3d0e544ede174, // 2^(158/512) == 1.2384998981998168
    0x3d7c4976d27fa, // 2^(159/512) == 1.2401777186482819
    0x3dea64c123423, // 2^(160/512) == 1.2418578120734842
    0x3e58a63b0a09b, // 2^(161/512) == 1.24354018155467
    0x3ec70df1c5175, // 2^(162/512) == 1.245224830175258
    0x3f359bf29743f, // 2^(163/512) == 1.2469117610228435
    0x3fa4504ac801c, // 2^(164/512) == 1.2486009771892048
    0x40132b07a35df, // 2^(165/512) == 1.2502924817703087
    0x40822c367a025, // 2^(166/512) == 1.2519862778663164
    0x40f153e4a136a, // 2^(167/512) == 1.2536823685815883
    0x4160a21f72e2a, // 2^(168/512) == 1.255380757024691
    0x41d016f44d8f5, // 2^(169/512) == 1.2570814463084024
    0x423fb2709468a, // 2^(170/512) == 1.2587844395497165
    0x42af74a1af3f2, // 2^(171/512) == 1.260489739869851
    0x431f5d950a897, // 2^(172/512) == 1.2621973503942507
    0x438f6d5817663, // 2^(173/512) == 1.263907274252596
    0x43ffa3f84b9d5, // 2^(174/512) == 1.2656195145788065
    0x4470018321a1a, // 2^(175/512) == 1.2673340745110466
    0x44e086061892e, // 2^(176/512) == 1.2690509571917334
    0x4551318eb43ec, // 2^(177/512) == 1.2707701657675399
    0x45c2042a7d232, // 2^(178/512) == 1.2724917033894028
    0x4632fde7006f4, // 2^(179/512) == 1.274215573212527
    0x46a41ed1d0058, // 2^(180/512) == 1.2759417783963922
    0x471566f8827d0, // 2^(181/512) == 1.2776703221047576
    0x4786d668b3237, // 2^(182/512) == 1.2794012075056693
    0x47f86d3001fe6, // 2^(183/512) == 1.2811344377714646
    0x486a2b5c13cd1, // 2^(184/512) == 1.2828700160787785
    0x48dc10fa920a2, // 2^(185/512) == 1.2846079456085495
    0x494e1e192aed2, // 2^(186/512) == 1.2863482295460256
    0x49c052c5916c5, // 2^(187/512) == 1.28809087108077
    0x4a32af0d7d3df, // 2^(188/512) == 1.289835873406666
    0x4aa532feaada6, // 2^(189/512) == 1.2915832397219247
    0x4b17dea6db7d7, // 2^(190/512) == 1.2933329732290895
    0x4b8ab213d5283, // 2^(191/512) == 1.2950850771350424
    0x4bfdad5362a28, // 2^(192/512) == 1.2968395546510099
    0x4c70d073537cb, // 2^(193/512) == 1.2985964089925683
    0x4ce41b817c115, // 2^(194/512) == 1.3003556433796508
    0x4d578e8bb586c, // 2^(195/512) == 1.3021172610365523
    0x4dcb299fddd0e, // 2^(196/512) == 1.303881265191936
    0x4e3eeccbd7b2b, // 2^(197/512) == 1.3056476590788388
    0x4eb2d81d8abff, // 2^(198/512) == 1.3074164459346773
    0x4f26eba2e35f1, // 2^(199/512) == 1.3091876290012545
    0x4f9b2769d2ca7, // 2^(200/512) == 1.3109612115247644
    0x500f8b804f127, // 2^(201/512) == 1.3127371967557993
    0x508417f4531ef, // 2^(202/512) == 1.3145155879493549
    0x50f8ccd3deb0d, // 2^(203/512) == 1.316296388364836
    0x516daa2cf6642, // 2^(204/512) == 1.318079601266064
    0x51e2b00da3b14, // 2^(205/512) == 1.3198652299212812
    0x5257de83f4eef, // 2^(206/512) == 1.3216532776031575
    0x52cd359dfd53d, // 2^(207/512) == 1.3234437475887966
    0x5342b569d4f82, // 2^(208/512) == 1.3252366431597413
    0x53b85df598d78, // 2^(209/512) == 1.3270319676019806
    0x542e2f4f6ad28, // 2^(210/512) == 1.3288297242059546
    0x54a4298571b06, // 2^(211/512) == 1.330629916266561
    0x551a4ca5d920f, // 2^(212/512) == 1.3324325470831615
    0x559098bed1be0, // 2^(213/512) == 1.3342376199595876
    0x56070dde910d2, // 2^(214/512) == 1.3360451382041458
    0x567dac1351819, // 2^(215/512) == 1.3378551051296255
    0x56f4736b527db, // 2^(216/512) == 1.3396675240533031
    0x576b63f4d854d, // 2^(217/512) == 1.3414823982969495
    0x57e27dbe2c4cf, // 2^(218/512) == 1.3432997311868353
    0x5859c0d59ca08, // 2^(219/512) == 1.3451195260537379
    0x58d12d497c7fe, // 2^(220/512) == 1.346941786232946
    0x5948c32824135, // 2^(221/512) == 1.3487665150642674
    0x59c0827ff07cc, // 2^(222/512) == 1.3505937158920345
    0x5a386b5f43d93, // 2^(223/512) == 1.3524233920651099
    0x5ab07dd48542a, // 2^(224/512) == 1.3542555469368929
    0x5b28b9ee20d1e, // 2^(225/512) == 1.356090183865326
    0x5ba11fba87a03, // 2^(226/512) == 1.3579273062129011
    0x5c19af482fc8f, // 2^(227/512) == 1.3597669173466647
    0x5c9268a5946b8, // 2^(228/512) == 1.361609020638225
    0x5d0b4be135acc, // 2^(229/512) == 1.3634536194637574
    0x5d84590998b93, // 2^(230/512) == 1.365300717204012
    0x5dfd902d47c65, // 2^(231/512) == 1.3671503172443178
    0x5e76f15ad2149, // 2^(232/512) == 1.3690024229745907
    0x5ef07ca0cbf10, // 2^(233/512) == 1.3708570377893388
    0x5f6a320dceb71, // 2^(234/512) == 1.3727141650876684
    0x5fe411b078d27, // 2^(235/512) == 1.3745738082732915
    0x605e1b976dc09, // 2^(236/512) == 1.3764359707545302
    0x60d84fd15612b, // 2^(237/512) == 1.3783006559443247
    0x6152ae6cdf6f5, // 2^(238/512) == 1.3801678672602382
    0x61cd3778bc945, // 2^(239/512) == 1.3820376081244643
    0x6247eb03a5585, // 2^(240/512) == 1.383909881963832
    0x62c2c91c56ace, // 2^(241/512) == 1.3857846922098136
    0x633dd1d1929fe, // 2^(242/512) == 1.3876620422985293
    0x63b90532205d8, // 2^(243/512) == 1.3895419356707546
    0x6434634ccc320, // 2^(244/512) == 1.3914243757719262
    0x64afec30678b7, // 2^(245/512) == 1.3933093660521487
    0x652b9febc8fb7, // 2^(246/512) == 1.3951969099662003
    0x65a77e8dcc390, // 2^(247/512) == 1.3970870109735394
    0x6623882552225, // 2^(248/512) == 1.3989796725383112
    0x669fbcc140be8, // 2^(249/512) == 1.400874898129354
    0x671c1c70833f6, // 2^(250/512) == 1.4027726912202048
    0x6798a7420a036, // 2^(251/512) == 1.404673055289107
    0x68155d44ca974, // 2^(252/512) == 1.4065759938190157
    0x68923e87bfb7b, // 2^(253/512) == 1.408481510297604
    0x690f4b19e9539, // 2^(254/512) == 1.4103896082172709
    0x698c830a4c8d4, // 2^(255/512) == 1.4123002910751454
    0x6a09e667f3bcd, // 2^(256/512) == 1.4142135623730951
    0x6a877541ee719, // 2^(257/512) == 1.4161294256177313
    0x6b052fa75173f, // 2^(258/512) == 1.4180478843204154
    0x6b8315a736c75, // 2^(259/512) == 1.419968941997266
    0x6c012750bdabf, // 2^(260/512) == 1.4218926021691656
    0x6c7f64b30aa09, // 2^(261/512) == 1.4238188683617656
    0x6cfdcddd47646, // 2^(262/512) == 1.4257477441054944
    0x6d7c62dea2f8b, // 2^(263/512) == 1.4276792329355625
    0x6dfb23c651a2f, // 2^(264/512) == 1.42961333839197
    0x6e7a10a38cee8, // 2^(265/512) == 1.431550064019513
    0x6ef9298593ae5, // 2^(266/512) == 1.433489413367789
    0x6f786e7ba9fef, // 2^(267/512) == 1.4354313899912048
    0x6ff7df9519484, // 2^(268/512) == 1.4373759974489824
    0x70777ce1303f6, // 2^(269/512) == 1.4393232393051654
    0x70f7466f42e88, // 2^(270/512) == 1.4412731191286259
    0x71773c4eaa988, // 2^(271/512) == 1.4432256404930701
    0x71f75e8ec5f74, // 2^(272/512) == 1.4451808069770467
    0x7277ad3ef9011, // 2^(273/512) == 1.4471386221639515
    0x72f8286ead08a, // 2^(274/512) == 1.449099089642035
    0x7378d02d50b90, // 2^(275/512) == 1.451062213004409
    0x73f9a48a58174, // 2^(276/512) == 1.4530279958490526
    0x747aa5953c849, // 2^(277/512) == 1.4549964417788195
    0x74fbd35d7cbfe, // 2^(278/512) == 1.456967554401444
    0x757d2df29ce7d, // 2^(279/512) == 1.458941337329548
    0x75feb564267c9, // 2^(280/512) == 1.460917794180647
    0x768069c1a861e, // 2^(281/512) == 1.4628969285771585
    0x77024b1ab6e0a, // 2^(282/512) == 1.464878744146406
    0x7784597eeba8f, // 2^(283/512) == 1.4668632445206276
    0x780694fde5d40, // 2^(284/512) == 1.468850433336982
    0x7888fda749e5e, // 2^(285/512) == 1.4708403142375555
    0x790b938ac1cf7, // 2^(286/512) == 1.4728328908693678
    0x798e56b7fcf04, // 2^(287/512) == 1.4748281668843797
    0x7a11473eb0187, // 2^(288/512) == 1.4768261459394993
    0x7a94652e958aa, // 2^(289/512) == 1.4788268316965891
    0x7b17b0976cfdb, // 2^(290/512) == 1.4808302278224719
    0x7b9b2988fb9ed, // 2^(291/512) == 1.4828363379889382
    0x7c1ed0130c133, // 2^(292/512) == 1.4848451658727526
    0x7ca2a4456e7a3, // 2^(293/512) == 1.486856715155661
    0x7d26a62ff86f1, // 2^(294/512) == 1.4888709895243972
    0x7daad5e2850ac, // 2^(295/512) == 1.4908879926706886
    0x7e2f336cf4e63, // 2^(296/512) == 1.492907728291265
    0x7eb3bedf2e1ba, // 2^(297/512) == 1.4949302000878633
    0x7f3878491c491, // 2^(298/512) == 1.4969554117672355
    0x7fbd5fbab0920, // 2^(299/512) == 1.4989833670411556
    0x80427543e1a12, // 2^(300/512) == 1.5010140696264256
    0x80c7b8f4abaa9, // 2^(301/512) == 1.5030475232448828
    0x814d2add106da, // 2^(302/512) == 1.5050837316234067
    0x81d2cb0d1736b, // 2^(303/512) == 1.5071226984939254
    0x82589994cce13, // 2^(304/512) == 1.5091644275934228
    0x82de968443d9b, // 2^(305/512) == 1.5112089226639458
    0x8364c1eb941f8, // 2^(306/512) == 1.51325618745261
    0x83eb1bdadb46e, // 2^(307/512) == 1.515306225711608
    0x8471a4623c7ad, // 2^(308/512) == 1.5173590411982147
    0x84f85b91e07f2, // 2^(309/512) == 1.5194146376747963
    0x857f4179f5b21, // 2^(310/512) == 1.5214730189088146
    0x8606562ab00ed, // 2^(311/512) == 1.5235341886728364
    0x868d99b4492ed, // 2^(312/512) == 1.5255981507445384
    0x87150c27004c3, // 2^(313/512) == 1.5276649089067156
    0x879cad931a437, // 2^(314/512) == 1.5297344669472872
    0x88247e08e1957, // 2^(315/512) == 1.531806828659304
    0x88ac7d98a669a, // 2^(316/512) == 1.5338819978409561
    0x8934ac52be8f8, // 2^(317/512) == 1.535959978295578
    0x89bd0a4785810, // 2^(318/512) == 1.538040773831657
    0x8a4597875c645, // 2^(319/512) == 1.5401243882628404
    0x8ace5422aa0dc, // 2^(320/512) == 1.542210825407941
    0x8b574029db01f, // 2^(321/512) == 1.5443000890909457
    0x8be05bad61779, // 2^(322/512) == 1.5463921831410217
    0x8c69a6bdb5598, // 2^(323/512) == 1.5484871113925234
    0x8cf3216b5448c, // 2^(324/512) == 1.550584877685
    0x8d7ccbc6c19e7, // 2^(325/512) == 1.5526854858632022
    0x8e06a5e0866d9, // 2^(326/512) == 1.5547889397770887
    0x8e90afc931858, // 2^(327/512) == 1.5568952432818346
    0x8f1ae99157737, // 2^(328/512) == 1.5590044002378372
    0x8fa553499284b, // 2^(329/512) == 1.5611164145107235
    0x902fed0282c8b, // 2^(330/512) == 1.5632312899713579
    0x90bab6ccce12c, // 2^(331/512) == 1.565349030495848
    0x9145b0b91ffc6, // 2^(332/512) == 1.567469639965553
    0x91d0dad829e70, // 2^(333/512) == 1.56959312226709
    0x925c353aa2fe2, // 2^(334/512) == 1.5717194812923414
    0x92e7bff148396, // 2^(335/512) == 1.5738487209384622
    0x93737b0cdc5e5, // 2^(336/512) == 1.5759808451078865
    0x93ff669e2802c, // 2^(337/512) == 1.5781158577083358
    0x948b82b5f98e5, // 2^(338/512) == 1.5802537626528246
    0x9517cf65253d1, // 2^(339/512) == 1.5823945638596693
    0x95a44cbc8520f, // 2^(340/512) == 1.5845382652524937
    0x9630faccf9244, // 2^(341/512) == 1.5866848707602381
    0x96bdd9a7670b3, // 2^(342/512) == 1.588834384317164
    0x974ae95cba769, // 2^(343/512) == 1.5909868098628641
    0x97d829fde4e50, // 2^(344/512) == 1.593142151342267
    0x98659b9bddb5c, // 2^(345/512) == 1.5953004127056465
    0x98f33e47a22a3, // 2^(346/512) == 1.5974615979086273
    0x9981121235681, // 2^(347/512) == 1.599625710912193
    0x9a0f170ca07ba, // 2^(348/512) == 1.6017927556826934
    0x9a9d4d47f2598, // 2^(349/512) == 1.6039627361918516
    0x9b2bb4d53fe0d, // 2^(350/512) == 1.606135656416771
    0x9bba4dc5a3dd4, // 2^(351/512) == 1.6083115203399432
    0x9c49182a3f091, // 2^(352/512) == 1.6104903319492545
    0x9cd81414380f3, // 2^(353/512) == 1.612672095237994
    0x9d674194bb8d5, // 2^(354/512) == 1.6148568142048607
    0x9df6a0bcfc15f, // 2^(355/512) == 1.6170444928539707
    0x9e86319e32324, // 2^(356/512) == 1.619235135194864
    0x9f15f4499c648, // 2^(357/512) == 1.621428745242513
    0x9fa5e8d07f29e, // 2^(358/512) == 1.6236253270173289
    0xa0360f4424fcb, // 2^(359/512) == 1.62582488454517
    0xa0c667b5de565, // 2^(360/512) == 1.6280274218573478
    0xa156f23701b16, // 2^(361/512) == 1.6302329429906357
    0xa1e7aed8eb8bc, // 2^(362/512) == 1.6324414519872752
    0xa2789dacfe68c, // 2^(363/512) == 1.6346529528949842
    0xa309bec4a2d34, // 2^(364/512) == 1.6368674497669646
    0xa39b1231475f8, // 2^(365/512) == 1.6390849466619084
    0xa42c980460ad8, // 2^(366/512) == 1.6413054476440063
    0xa4be504f696b1, // 2^(367/512) == 1.6435289567829552
    0xa5503b23e255d, // 2^(368/512) == 1.645755478153965
    0xa5e25893523d5, // 2^(369/512) == 1.6479850158377662
    0xa674a8af46053, // 2^(370/512) == 1.650217573920618
    0xa7072b8950a73, // 2^(371/512) == 1.6524531564943146
    0xa799e1330b359, // 2^(372/512) == 1.6546917676561945
    0xa82cc9be14dcb, // 2^(373/512) == 1.656933411509146
    0xa8bfe53c12e59, // 2^(374/512) == 1.6591780921616162
    0xa95333beb0b7e, // 2^(375/512) == 1.6614258137276177
    0xa9e6b5579fdc0, // 2^(376/512) == 1.6636765803267366
    0xaa7a6a1897fd3, // 2^(377/512) == 1.6659303960841398
    0xab0e521356ebb, // 2^(378/512) == 1.6681872651305827
    0xaba26d59a09ef, // 2^(379/512) == 1.6704471916024166
    0xac36bbfd3f37a, // 2^(380/512) == 1.6727101796415966
    0xaccb3e100301e, // 2^(381/512) == 1.674976233395689
    0xad5ff3a3c2775, // 2^(382/512) == 1.6772453570178787
    0xadf4dcca5a414, // 2^(383/512) == 1.679517554666977
    0xae89f995ad3ae, // 2^(384/512) == 1.6817928305074292
    0xaf1f4a17a4735, // 2^(385/512) == 1.6840711887093225
    0xafb4ce622f2ff, // 2^(386/512) == 1.6863526334483934
    0xb04a868742ee5, // 2^(387/512) == 1.688637168906035
    0xb0e07298db666, // 2^(388/512) == 1.6909247992693053
    0xb17692a8fa8ce, // 2^(389/512) == 1.6932155287309345
    0xb20ce6c9a8953, // 2^(390/512) == 1.6955093614893328
    0xb2a36f0cf3f3a, // 2^(391/512) == 1.697806301748598
    0xb33a2b84f15fb, // 2^(392/512) == 1.7001063537185235
    0xb3d11c43bbd62, // 2^(393/512) == 1.7024095216146056
    0xb468415b749b1, // 2^(394/512) == 1.7047158096580513
    0xb4ff9ade433c6, // 2^(395/512) == 1.7070252220757864
    0xb59728de5593a, // 2^(396/512) == 1.709337763100463
    0xb62eeb6ddfc87, // 2^(397/512) == 1.7116534369704668
    0xb6c6e29f1c52b, // 2^(398/512) == 1.7139722479299262
    0xb75f0e844bfc7, // 2^(399/512) == 1.7162942002287183
    0xb7f76f2fb5e47, // 2^(400/512) == 1.718619298122478
    0xb89004b3a7804, // 2^(401/512) == 1.7209475458726056
    0xb928cf22749e4, // 2^(402/512) == 1.723278947746274
    0xb9c1ce8e77681, // 2^(403/512) == 1.7256135080164372
    0xba5b030a1064a, // 2^(404/512) == 1.7279512309618377
    0xbaf46ca7a67a8, // 2^(405/512) == 1.7302921208670146
    0xbb8e0b79a6f1f, // 2^(406/512) == 1.732636182022311
    0xbc27df9285776, // 2^(407/512) == 1.7349834187238833
    0xbcc1e904bc1d3, // 2^(408/512) == 1.7373338352737064
    0xbd5c27e2cb5e5, // 2^(409/512) == 1.7396874359795842
    0xbdf69c3f3a207, // 2^(410/512) == 1.7420442251551564
    0xbe91462c95b60, // 2^(411/512) == 1.7444042071199064
    0xbf2c25bd71e09, // 2^(412/512) == 1.746767386199169
    0xbfc73b0468d30, // 2^(413/512) == 1.749133766724139
    0xc06286141b33d, // 2^(414/512) == 1.7515033530318782
    0xc0fe06ff301f5, // 2^(415/512) == 1.7538761494653248
    0xc199bdd85529d, // 2^(416/512) == 1.7562521603732997
    0xc235aab23e61e, // 2^(417/512) == 1.7586313901105153
    0xc2d1cd9fa652c, // 2^(418/512) == 1.761013843037584
    0xc36e26b34e066, // 2^(419/512) == 1.763399523521025
    0xc40ab5fffd07b, // 2^(420/512) == 1.765788435933273
    0xc4a77b9881650, // 2^(421/512) == 1.7681805846526863
    0xc544778fafb23, // 2^(422/512) == 1.770575974063555
    0xc5e1a9f8630ad, // 2^(423/512) == 1.7729746085561076
    0xc67f12e57d14c, // 2^(424/512) == 1.7753764925265214
    0xc71cb269e601f, // 2^(425/512) == 1.7777816303769283
    0xc7ba88988c933, // 2^(426/512) == 1.7801900265154245
    0xc8589584661a1, // 2^(427/512) == 1.7826016853560775
    0xc8f6d9406e7b6, // 2^(428/512) == 1.7850166113189352
    0xc99553dfa8314, // 2^(429/512) == 1.7874348088300325
    0xca3405751c4db, // 2^(430/512) == 1.789856282321401
    0xcad2ee13da7cc, // 2^(431/512) == 1.7922810362310768
    0xcb720dcef906a, // 2^(432/512) == 1.7947090750031074
    0xcc1164b994d23, // 2^(433/512) == 1.797140403087561
    0xccb0f2e6d1675, // 2^(434/512) == 1.7995750249405351
    0xcd50b869d8f10, // 2^(435/512) == 1.8020129450241633
    0xcdf0b555dc3fa, // 2^(436/512) == 1.804454167806624
    0xce90e9be12cba, // 2^(437/512) == 1.8068986977621493
    0xcf3155b5bab74, // 2^(438/512) == 1.809346539371032
    0xcfd1f95018d17, // 2^(439/512) == 1.811797697119635
    0xd072d4a07897c, // 2^(440/512) == 1.8142521755003989
    0xd113e7ba2c38d, // 2^(441/512) == 1.81670997901185
    0xd1b532b08c969, // 2^(442/512) == 1.8191711121586087
    0xd256b596f948c, // 2^(443/512) == 1.8216355794513985
    0xd2f87080d89f2, // 2^(444/512) == 1.8241033854070534
    0xd39a638197a3c, // 2^(445/512) == 1.8265745345485263
    0xd43c8eacaa1d7, // 2^(446/512) == 1.8290490314048975
    0xd4def2158a91f, // 2^(447/512) == 1.831526880511383
    0xd5818dcfba488, // 2^(448/512) == 1.8340080864093427
    0xd62461eec14bf, // 2^(449/512) == 1.8364926536462887
    0xd6c76e862e6d4, // 2^(450/512) == 1.838980586775894
    0xd76ab3a99745b, // 2^(451/512) == 1.8414718903579999
    0xd80e316c98398, // 2^(452/512) == 1.843966568958626
    0xd8b1e7e2d479d, // 2^(453/512) == 1.8464646271499767
    0xd955d71ff6076, // 2^(454/512) == 1.848966069510451
    0xd9f9ff37adb4a, // 2^(455/512) == 1.85147090062465
    0xda9e603db3286, // 2^(456/512) == 1.8539791250833857
    0xdb42fa45c4dfe, // 2^(457/512) == 1.8564907474836896
    0xdbe7cd63a8315, // 2^(458/512) == 1.8590057724288205
    0xdc8cd9ab294e5, // 2^(459/512) == 1.8615242045282738
    0xdd321f301b461, // 2^(460/512) == 1.8640460483977892
    0xddd79e065807e, // 2^(461/512) == 1.8665713086593594
    0xde7d5641c0658, // 2^(462/512) == 1.8690999899412386
    0xdf2347f63c159, // 2^(463/512) == 1.8716320968779512
    0xdfc97337b9b5f, // 2^(464/512) == 1.8741676341103
    0xe06fd81a2ece1, // 2^(465/512) == 1.8767066062853746
    0xe11676b197d17, // 2^(466/512) == 1.8792490180565602
    0xe1bd4f11f8221, // 2^(467/512) == 1.8817948740835464
    0xe264614f5a129, // 2^(468/512) == 1.8843441790323345
    0xe30bad7dcee91, // 2^(469/512) == 1.886896937575248
    0xe3b333b16ee12, // 2^(470/512) == 1.8894531543909392
    0xe45af3fe592e8, // 2^(471/512) == 1.8920128341643991
    0xe502ee78b3ff7, // 2^(472/512) == 1.8945759815869658
    0xe5ab2334ac7ee, // 2^(473/512) == 1.897142601356332
    0xe653924676d76, // 2^(474/512) == 1.8997126981765553
    0xe6fc3bc24e351, // 2^(475/512) == 1.9022862767580657
    0xe7a51fbc74c84, // 2^(476/512) == 1.9048633418176744
    0xe84e3e4933c7e, // 2^(477/512) == 1.9074438980785824
    0xe8f7977cdb740, // 2^(478/512) == 1.9100279502703899
    0xe9a12b6bc3182, // 2^(479/512) == 1.9126155031291039
    0xea4afa2a490da, // 2^(480/512) == 1.9152065613971474
    0xeaf503ccd2be6, // 2^(481/512) == 1.9178011298233684
    0xeb9f4867cca6f, // 2^(482/512) == 1.9203992131630476
    0xec49c80faa594, // 2^(483/512) == 1.9230008161779084
    0xecf482d8e67f1, // 2^(484/512) == 1.925605943636125
    0xed9f78d802dc2, // 2^(485/512) == 1.9282146003123306
    0xee4aaa2188511, // 2^(486/512) == 1.9308267909876273
    0xeef616ca06dd7, // 2^(487/512) == 1.9334425204495937
    0xefa1bee615a28, // 2^(488/512) == 1.9360617934922946
    0xf04da28a52e5a, // 2^(489/512) == 1.9386846149162893
    0xf0f9c1cb6412a, // 2^(490/512) == 1.9413109895286405
    0xf1a61cbdf5be7, // 2^(491/512) == 1.9439409221429231
    0xf252b376bba98, // 2^(492/512) == 1.9465744175792334
    0xf2ff860a70c22, // 2^(493/512) == 1.949211480664197
    0xf3ac948dd7274, // 2^(494/512) == 1.9518521162309783
    0xf459df15b82ad, // 2^(495/512) == 1.95449632911929
    0xf50765b6e4541, // 2^(496/512) == 1.9571441241754004
    0xf5b5288633626, // 2^(497/512) == 1.9597955062521435
    0xf6632798844f9, // 2^(498/512) == 1.9624504802089275
    0xf7116302bd527, // 2^(499/512) == 1.965109050911744
    0xf7bfdad9cbe14, // 2^(500/512) == 1.9677712232331759
    0xf86e8f32a4b46, // 2^(501/512) == 1.970437002052408
    0xf91d802243c89, // 2^(502/512) == 1.9731063922552343
    0xf9ccadbdac61d, // 2^(503/512) == 1.9757793987340684
    0xfa7c1819e90d9, // 2^(504/512) == 1.9784560263879511
    0xfb2bbf4c0ba55, // 2^(505/512) == 1.9811362801225603
    0xfbdba3692d514, // 2^(506/512) == 1.9838201648502194
    0xfc8bc4866e8ae, // 2^(507/512) == 1.9865076854899075
    0xfd3c22b8f71f2, // 2^(508/512) == 1.9891988469672666
    0xfdecbe15f6315, // 2^(509/512) == 1.9918936542146117
    0xfe9d96b2a23da, // 2^(510/512) == 1.9945921121709405
    0xff4eaca4391b6, // 2^(511/512) == 1.9972942257819404
];
