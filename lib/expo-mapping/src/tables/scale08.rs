// Code generated by `expo-table-gen 8`. DO NOT EDIT.

//! Mantissa thresholds for scale 8.

/// Entry `k` is the 52-bit significand of the smallest double not less than `2^(k/256)`.
pub(super) static THRESHOLDS: [u64; 256] = [
    0x0000000000000, // 2^(0/256) == 1
    0x00b1afa5abcbf, // 2^(1/256) == 1.0027112750502025
    0x0163da9fb3336, // 2^(2/256) == 1.005429901112803
    0x02168143b0281, // 2^(3/256) == 1.0081558981184175
    0x02c9a3e778061, // 2^(4/256) == 1.0108892860517005
    0x037d42e11bbcd, // 2^(5/256) == 1.0136300849514897
    0x04315e86e7f85, // 2^(6/256) == 1.016378314910953
    0x04e5f72f654b2, // 2^(7/256) == 1.0191339960777381
    0x059b0d3158575, // 2^(8/256) == 1.0218971486541168
    0x0650a0e3c1f89, // 2^(9/256) == 1.0246677928971357
    0x0706b29ddf6de, // 2^(10/256) == 1.0274459491187637
    0x07bd42b72a837, // 2^(11/256) == 1.0302316376860412
    0x0874518759bc9, // 2^(12/256) == 1.0330248790212286
    0x092bdf66607e0, // 2^(13/256) == 1.0358256936019572
    0x09e3ecac6f384, // 2^(14/256) == 1.038634101961379
    0x0a9c79b1f391a, // 2^(15/256) == 1.0414501246883163
    0x0b5586cf98910, // 2^(16/256) == 1.044273782427414
    0x0c0f145e46c86, // 2^(17/256) == 1.04710509587929
    0x0cc922b7247f8, // 2^(18/256) == 1.0499440858006874
    0x0d83b23395dec, // 2^(19/256) == 1.0527907730046264
    0x0e3ec32d3d1a3, // 2^(20/256) == 1.0556451783605574
    0x0efa55fdfa9c5, // 2^(21/256) == 1.0585073227945128
    0x0fb66affed31b, // 2^(22/256) == 1.061377227289262
    0x1073028d7233f, // 2^(23/256) == 1.0642549128844647
    0x11301d0125b51, // 2^(24/256) == 1.0671404006768237
    0x11edbab5e2ab6, // 2^(25/256) == 1.0700337118202419
    0x12abdc06c31cc, // 2^(26/256) == 1.0729348675259756
    0x136a814f204ab, // 2^(27/256) == 1.075843889062791
    0x1429aaea92de0, // 2^(28/256) == 1.0787607977571199
    0x14e95934f312e, // 2^(29/256) == 1.0816856149932152
    0x15a98c8a58e52, // 2^(30/256) == 1.0846183622133094
    0x166a45471c3c3, // 2^(31/256) == 1.0875590609177699
    0x172b83c7d517b, // 2^(32/256) == 1.0905077326652577
    0x17ed48695bbc1, // 2^(33/256) == 1.093464399072886
    0x18af9388c8dea, // 2^(34/256) == 1.0964290818163769
    0x1972658375d30, // 2^(35/256) == 1.0994018026302221
    0x1a35beb6fcb76, // 2^(36/256) == 1.1023825833078411
    0x1af99f8138a1d, // 2^(37/256) == 1.1053714457017414
    0x1bbe084045cd4, // 2^(38/256) == 1.1083684117236787
    0x1c82f95281c6c, // 2^(39/256) == 1.1113735033448178
    0x1d4873168b9ab, // 2^(40/256) == 1.1143867425958927
    0x1e0e75eb44027, // 2^(41/256) == 1.1174081515673693
    0x1ed5022fcd91d, // 2^(42/256) == 1.1204377524096067
    0x1f9c18438ce4d, // 2^(43/256) == 1.12347556733302
    0x2063b88628cd7, // 2^(44/256) == 1.126521618608242
    0x212be3578a81a, // 2^(45/256) == 1.1295759285662883
    0x21f49917ddc97, // 2^(46/256) == 1.1326385195987194
    0x22bdda27912d2, // 2^(47/256) == 1.1357094141578057
    0x2387a6e756239, // 2^(48/256) == 1.1387886347566918
    0x2451ffb82140b, // 2^(49/256) == 1.1418762039695618
    0x251ce4fb2a640, // 2^(50/256) == 1.1449721444318044
    0x25e85711ece76, // 2^(51/256) == 1.1480764788401792
    0x26b4565e27cde, // 2^(52/256) == 1.151189229952983
    0x2780e341ddf2a, // 2^(53/256) == 1.1543104205902162
    0x284dfe1f56381, // 2^(54/256) == 1.1574400736337511
    0x291ba7591bb70, // 2^(55/256) == 1.1605782120274988
    0x29e9df51fdee2, // 2^(56/256) == 1.1637248587775777
    0x2ab8a66d10f13, // 2^(57/256) == 1.1668800369524817
    0x2b87fd0dad990, // 2^(58/256) == 1.1700437696832502
    0x2c57e39771b2f, // 2^(59/256) == 1.1732160801636373
    0x2d285a6e4030c, // 2^(60/256) == 1.1763969916502814
    0x2df961f64158a, // 2^(61/256) == 1.179586527462876
    0x2ecafa93e2f57, // 2^(62/256) == 1.1827847109843412
    0x2f9d24abd886b, // 2^(63/256) == 1.1859915656609938
    0x306fe0a31b716, // 2^(64/256) == 1.1892071150027212
    0x31432edeeb2fe, // 2^(65/256) == 1.1924313825831514
    0x32170fc4cd832, // 2^(66/256) == 1.1956643920398276
    0x32eb83ba8ea32, // 2^(67/256) == 1.1989061670743806
    0x33c08b2641700, // 2^(68/256) == 1.2021567314527033
    0x3496266e3fa2d, // 2^(69/256) == 1.2054161090051239
    0x356c55f929ff1, // 2^(70/256) == 1.2086843236265816
    0x36431a2de883b, // 2^(71/256) == 1.2119613992768012
    0x371a7373aa9cb, // 2^(72/256) == 1.215247359980469
    0x37f26231e754a, // 2^(73/256) == 1.2185422298274085
    0x38cae6d05d866, // 2^(74/256) == 1.2218460329727576
    0x39a401b7140ef, // 2^(75/256) == 1.2251587936371455
    0x3a7db34e59ff7, // 2^(76/256) == 1.22848053610687
    0x3b57fbfec6cf5, // 2^(77/256) == 1.231811284734076
    0x3c32dc313a8e5, // 2^(78/256) == 1.2351510639369334
    0x3d0e544ede174, // 2^(79/256) == 1.2384998981998168
    0x3dea64c123423, // 2^(80/256) == 1.2418578120734842
    0x3ec70df1c5175, // 2^(81/256) == 1.245224830175258
    0x3fa4504ac801c, // 2^(82/256) == 1.2486009771892048
    0x40822c367a025, // 2^(83/256) == 1.2519862778663164
    0x4160a21f72e2a, // 2^(84/256) == 1.255380757024691
    0x423fb2709468a, // 2^(85/256) == 1.2587844395497165
    0x431f5d950a897, // 2^(86/256) == 1.2621973503942507
    0x43ffa3f84b9d5, // 2^(87/256) == 1.2656195145788065
    0x44e086061892e, // 2^(88/256) == 1.2690509571917334
    0x45c2042a7d232, // 2^(89/256) == 1.2724917033894028
    0x46a41ed1d0058, // 2^(90/256) == 1.2759417783963922
    0x4786d668b3237, // 2^(91/256) == 1.2794012075056693
    0x486a2b5c13cd1, // 2^(92/256) == 1.2828700160787785
    0x494e1e192aed2, // 2^(93/256) == 1.2863482295460256
    0x4a32af0d7d3df, // 2^(94/256) == 1.289835873406666
    0x4b17dea6db7d7, // 2^(95/256) == 1.2933329732290895
    0x4bfdad5362a28, // 2^(96/256) == 1.2968395546510099
    0x4ce41b817c115, // 2^(97/256) == 1.3003556433796508
    0x4dcb299fddd0e, // 2^(98/256) == 1.303881265191936
    0x4eb2d81d8abff, // 2^(99/256) == 1.3074164459346773
    0x4f9b2769d2ca7, // 2^(100/256) == 1.3109612115247644
    0x508417f4531ef, // 2^(101/256) == 1.3145155879493549
    0x516daa2cf6642, // 2^(102/256) == 1.318079601266064
    0x5257de83f4eef, // 2^(103/256) == 1.3216532776031575
    0x5342b569d4f82, // 2^(104/256) == 1.3252366431597413
    0x542e2f4f6ad28, // 2^(105/256) == 1.3288297242059546
    0x551a4ca5d920f, // 2^(106/256) == 1.3324325470831615
    0x56070dde910d2, // 2^(107/256) == 1.3360451382041458
    0x56f4736b527db, // 2^(108/256) == 1.3396675240533031
    0x57e27dbe2c4cf, // 2^(109/256) == 1.3432997311868353
    0x58d12d497c7fe, // 2^(110/256) == 1.346941786232946
    0x59c0827ff07cc, // 2^(111/256) == 1.3505937158920345
    0x5ab07dd48542a, // 2^(112/256) == 1.3542555469368929
    0x5ba11fba87a03, // 2^(113/256) == 1.3579273062129011
    0x5c9268a5946b8, // 2^(114/256) == 1.361609020638225
    0x5d84590998b93, // 2^(115/256) == 1.365300717204012
    0x5e76f15ad2149, // 2^(116/256) == 1.3690024229745907
    0x5f6a320dceb71, // 2^(117/256) == 1.3727141650876684
    0x605e1b976dc09, // 2^(118/256) == 1.3764359707545302
    0x6152ae6cdf6f5, // 2^(119/256) == 1.3801678672602382
    0x6247eb03a5585, // 2^(120/256) == 1.383909881963832
    0x633dd1d1929fe, // 2^(121/256) == 1.3876620422985293
    0x6434634ccc320, // 2^(122/256) == 1.3914243757719262
    0x652b9febc8fb7, // 2^(123/256) == 1.3951969099662003
    0x6623882552225, // 2^(124/256) == 1.3989796725383112
    0x671c1c70833f6, // 2^(125/256) == 1.4027726912202048
    0x68155d44ca974, // 2^(126/256) == 1.4065759938190157
    0x690f4b19e9539, // 2^(127/256) == 1.4103896082172709
    0x6a09e667f3bcd, // 2^(128/256) == 1.4142135623730951
    0x6b052fa75173f, // 2^(129/256) == 1.4180478843204154
    0x6c012750bdabf, // 2^(130/256) == 1.4218926021691656
    0x6cfdcddd47646, // 2^(131/256) == 1.4257477441054944
    0x6dfb23c651a2f, // 2^(132/256) == 1.42961333839197
    0x6ef9298593ae5, // 2^(133/256) == 1.433489413367789
    0x6ff7df9519484, // 2^(134/256) == 1.4373759974489824
    0x70f7466f42e88, // 2^(135/256) == 1.4412731191286259
    0x71f75e8ec5f74, // 2^(136/256) == 1.4451808069770467
    0x72f8286ead08a, // 2^(137/256) == 1.449099089642035
    0x73f9a48a58174, // 2^(138/256) == 1.4530279958490526
    0x74fbd35d7cbfe, // 2^(139/256) == 1.456967554401444
    0x75feb564267c9, // 2^(140/256) == 1.460917794180647
    0x77024b1ab6e0a, // 2^(141/256) == 1.464878744146406
    0x780694fde5d40, // 2^(142/256) == 1.468850433336982
    0x790b938ac1cf7, // 2^(143/256) == 1.4728328908693678
    0x7a11473eb0187, // 2^(144/256) == 1.4768261459394993
    0x7b17b0976cfdb, // 2^(145/256) == 1.4808302278224719
    0x7c1ed0130c133, // 2^(146/256) == 1.4848451658727526
    0x7d26a62ff86f1, // 2^(147/256) == 1.4888709895243972
    0x7e2f336cf4e63, // 2^(148/256) == 1.492907728291265
    0x7f3878491c491, // 2^(149/256) == 1.4969554117672355
    0x80427543e1a12, // 2^(150/256) == 1.5010140696264256
    0x814d2add106da, // 2^(151/256) == 1.5050837316234067
    0x82589994cce13, // 2^(152/256) == 1.5091644275934228
    0x8364c1eb941f8, // 2^(153/256) == 1.51325618745261
    0x8471a4623c7ad, // 2^(154/256) == 1.5173590411982147
    0x857f4179f5b21, // 2^(155/256) == 1.5214730189088146
    0x868d99b4492ed, // 2^(156/256) == 1.5255981507445384
    0x879cad931a437, // 2^(157/256) == 1.5297344669472872
    0x88ac7d98a669a, // 2^(158/256) == 1.5338819978409561
    0x89bd0a4785810, // 2^(159/256) == 1.538040773831657
    0x8ace5422aa0dc, // 2^(160/256) == 1.542210825407941
    0x8be05bad61779, // 2^(161/256) == 1.5463921831410217
    0x8cf3216b5448c, // 2^(162/256) == 1.550584877685
    0x8e06a5e0866d9, // 2^(163/256) == 1.5547889397770887
    0x8f1ae99157737, // 2^(164/256) == 1.5590044002378372
    0x902fed0282c8b, // 2^(165/256) == 1.5632312899713579
    0x9145b0b91ffc6, // 2^(166/256) == 1.567469639965553
    0x925c353aa2fe2, // 2^(167/256) == 1.5717194812923414
    0x93737b0cdc5e5, // 2^(168/256) == 1.5759808451078865
    0x948b82b5f98e5, // 2^(169/256) == 1.5802537626528246
    0x95a44cbc8520f, // 2^(170/256) == 1.5845382652524937
    0x96bdd9a7670b3, // 2^(171/256) == 1.588834384317164
    0x97d829fde4e50, // 2^(172/256) == 1.593142151342267
    0x98f33e47a22a3, // 2^(173/256) == 1.5974615979086273
    0x9a0f170ca07ba, // 2^(174/256) == 1.6017927556826934
    0x9b2bb4d53fe0d, // 2^(175/256) == 1.606135656416771
    0x9c49182a3f091, // 2^(176/256) == 1.6104903319492545
    0x9d674194bb8d5, // 2^(177/256) == 1.6148568142048607
    0x9e86319e32324, // 2^(178/256) == 1.619235135194864
    0x9fa5e8d07f29e, // 2^(179/256) == 1.6236253270173289
    0xa0c667b5de565, // 2^(180/256) == 1.6280274218573478
    0xa1e7aed8eb8bc, // 2^(181/256) == 1.6324414519872752
    0xa309bec4a2d34, // 2^(182/256) == 1.6368674497669646
    0xa42c980460ad8, // 2^(183/256) == 1.6413054476440063
    0xa5503b23e255d, // 2^(184/256) == 1.645755478153965
    0xa674a8af46053, // 2^(185/256) == 1.650217573920618
    0xa799e1330b359, // 2^(186/256) == 1.6546917676561945
    0xa8bfe53c12e59, // 2^(187/256) == 1.6591780921616162
    0xa9e6b5579fdc0, // 2^(188/256) == 1.6636765803267366
    0xab0e521356ebb, // 2^(189/256) == 1.6681872651305827
    0xac36bbfd3f37a, // 2^(190/256) == 1.6727101796415966
    0xad5ff3a3c2775, // 2^(191/256) == 1.6772453570178787
    0xae89f995ad3ae, // 2^(192/256) == 1.6817928305074292
    0xafb4ce622f2ff, // 2^(193/256) == 1.6863526334483934
    0xb0e07298db666, // 2^(194/256) == 1.6909247992693053
    0xb20ce6c9a8953, // 2^(195/256) == 1.6955093614893328
    0xb33a2b84f15fb, // 2^(196/256) == 1.7001063537185235
    0xb468415b749b1, // 2^(197/256) == 1.7047158096580513
    0xb59728de5593a, // 2^(198/256) == 1.709337763100463
    0xb6c6e29f1c52b, // 2^(199/256) == 1.7139722479299262
    0xb7f76f2fb5e47, // 2^(200/256) == 1.718619298122478
    0xb928cf22749e4, // 2^(201/256) == 1.723278947746274
    0xba5b030a1064a, // 2^(202/256) == 1.7279512309618377
    0xbb8e0b79a6f1f, // 2^(203/256) == 1.732636182022311
    0xbcc1e904bc1d3, // 2^(204/256) == 1.7373338352737064
    0xbdf69c3f3a207, // 2^(205/256) == 1.7420442251551564
    0xbf2c25bd71e09, // 2^(206/256) == 1.746767386199169
    0xc06286141b33d, // 2^(207/256) == 1.7515033530318782
    0xc199bdd85529d, // 2^(208/256) == 1.7562521603732997
    0xc2d1cd9fa652c, // 2^(209/256) == 1.761013843037584
    0xc40ab5fffd07b, // 2^(210/256) == 1.765788435933273
    0xc544778fafb23, // 2^(211/256) == 1.770575974063555
    0xc67f12e57d14c, // 2^(212/256) == 1.7753764925265214
    0xc7ba88988c933, // 2^(213/256) == 1.7801900265154245
    0xc8f6d9406e7b6, // 2^(214/256) == 1.7850166113189352
    0xca3405751c4db, // 2^(215/256) == 1.789856282321401
    0xcb720dcef906a, // 2^(216/256) == 1.7947090750031074
    0xccb0f2e6d1675, // 2^(217/256) == 1.7995750249405351
    0xcdf0b555dc3fa, // 2^(218/256) == 1.804454167806624
    0xcf3155b5bab74, // 2^(219/256) == 1.809346539371032
    0xd072d4a07897c, // 2^(220/256) == 1.8142521755003989
    0xd1b532b08c969, // 2^(221/256) == 1.8191711121586087
    0xd2f87080d89f2, // 2^(222/256) == 1.8241033854070534
    0xd43c8eacaa1d7, // 2^(223/256) == 1.8290490314048975
    0xd5818dcfba488, // 2^(224/256) == 1.8340080864093427
    0xd6c76e862e6d4, // 2^(225/256) == 1.838980586775894
    0xd80e316c98398, // 2^(226/256) == 1.843966568958626
    0xd955d71ff6076, // 2^(227/256) == 1.848966069510451
    0xda9e603db3286, // 2^(228/256) == 1.8539791250833857
    0xdbe7cd63a8315, // 2^(229/256) == 1.8590057724288205
    0xdd321f301b461, // 2^(230/256) == 1.8640460483977892
    0xde7d5641c0658, // 2^(231/256) == 1.8690999899412386
    0xdfc97337b9b5f, // 2^(232/256) == 1.8741676341103
    0xe11676b197d17, // 2^(233/256) == 1.8792490180565602
    0xe264614f5a129, // 2^(234/256) == 1.8843441790323345
    0xe3b333b16ee12, // 2^(235/256) == 1.8894531543909392
    0xe502ee78b3ff7, // 2^(236/256) == 1.8945759815869658
    0xe653924676d76, // 2^(237/256) == 1.8997126981765553
    0xe7a51fbc74c84, // 2^(238/256) == 1.9048633418176744
    0xe8f7977cdb740, // 2^(239/256) == 1.9100279502703899
    0xea4afa2a490da, // 2^(240/256) == 1.9152065613971474
    0xeb9f4867cca6f, // 2^(241/256) == 1.9203992131630476
    0xecf482d8e67f1, // 2^(242/256) == 1.925605943636125
    0xee4aaa2188511, // 2^(243/256) == 1.9308267909876273
    0xefa1bee615a28, // 2^(244/256) == 1.9360617934922946
    0xf0f9c1cb6412a, // 2^(245/256) == 1.9413109895286405
    0xf252b376bba98, // 2^(246/256) == 1.9465744175792334
    0xf3ac948dd7274, // 2^(247/256) == 1.9518521162309783
    0xf50765b6e4541, // 2^(248/256) == 1.9571441241754004
    0xf6632798844f9, // 2^(249/256) == 1.9624504802089275
    0xf7bfdad9cbe14, // 2^(250/256) == 1.9677712232331759
    0xf91d802243c89, // 2^(251/256) == 1.9731063922552343
    0xfa7c1819e90d9, // 2^(252/256) == 1.9784560263879511
    0xfbdba3692d514, // 2^(253/256) == 1.9838201648502194
    0xfd3c22b8f71f2, // 2^(254/256) == 1.9891988469672666
    0xfe9d96b2a23da, // 2^(255/256) == 1.9945921121709405
];
