// Code generated by `expo-table-gen 10`. DO NOT EDIT.

//! Mantissa thresholds for scale 10.

/// Entry `k` is the 52-bit significand of the smallest double not less than `2^(k/1024)`.
pub(super) static THRESHOLDS: [u64; 1024] = [
    0x0000000000000, // 2^(0/1024) == 1
    0x002c605e2e8cf, // 2^(1/1024) == 1.0006771306930664
    0x0058c86da1c0a, // 2^(2/1024) == 1.0013547198921082
    0x0085382faef84, // 2^(3/1024) == 1.0020327679075942
    0x00b1afa5abcbf, // 2^(4/1024) == 1.0027112750502025
    0x00de2ed0ee0f5, // 2^(5/1024) == 1.0033902416308227
    0x010ab5b2cbd12, // 2^(6/1024) == 1.0040696679605543
    0x0137444c9b5b5, // 2^(7/1024) == 1.0047495543507072
    0x0163da9fb3336, // 2^(8/1024) == 1.005429901112803
    0x019078ad6a19f, // 2^(9/1024) == 1.006110708558573
    0x01bd1e77170b5, // 2^(10/1024) == 1.006791976999961
    0x01e9cbfe113ef, // 2^(11/1024) == 1.0074737067491204
    0x02168143b0281, // 2^(12/1024) == 1.0081558981184175
    0x02433e494b755, // 2^(13/1024) == 1.0088385514204294
    0x027003103b10e, // 2^(14/1024) == 1.0095216669679448
    0x029ccf99d720b, // 2^(15/1024) == 1.0102052450739645
    0x02c9a3e778061, // 2^(16/1024) == 1.0108892860517005
    0x02f67ffa765e6, // 2^(17/1024) == 1.011573790214578
    0x032363d42b028, // 2^(18/1024) == 1.0122587578762339
    0x03504f75ef072, // 2^(19/1024) == 1.012944189350517
    0x037d42e11bbcd, // 2^(20/1024) == 1.0136300849514897
    0x03aa3e170aafe, // 2^(21/1024) == 1.0143164449934257
    0x03d7411915a8b, // 2^(22/1024) == 1.0150032697908127
    0x04044be896ab7, // 2^(23/1024) == 1.0156905596583508
    0x04315e86e7f85, // 2^(24/1024) == 1.016378314910953
    0x045e78f5640ba, // 2^(25/1024) == 1.0170665358637465
    0x048b9b35659d9, // 2^(26/1024) == 1.0177552228320705
    0x04b8c54847a28, // 2^(27/1024) == 1.0184443761314785
    0x04e5f72f654b2, // 2^(28/1024) == 1.0191339960777381
    0x051330ec1a040, // 2^(29/1024) == 1.0198240829868297
    0x0540727fc1762, // 2^(30/1024) == 1.0205146371749483
    0x056dbbebb786c, // 2^(31/1024) == 1.021205658958503
    0x059b0d3158575, // 2^(32/1024) == 1.0218971486541168
    0x05c866520045b, // 2^(33/1024) == 1.0225891065786274
    0x05f5c74f0bec3, // 2^(34/1024) == 1.0232815330490872
    0x06233029d8217, // 2^(35/1024) == 1.0239744283827628
    0x0650a0e3c1f89, // 2^(36/1024) == 1.0246677928971357
    0x067e197e26c15, // 2^(37/1024) == 1.025361626909903
    0x06ab99fa6407c, // 2^(38/1024) == 1.026055930738976
    0x06d92259d794d, // 2^(39/1024) == 1.0267507047024822
    0x0706b29ddf6de, // 2^(40/1024) == 1.0274459491187637
    0x07344ac7d9d51, // 2^(41/1024) == 1.0281416643063788
    0x0761ead925493, // 2^(42/1024) == 1.028837850584101
    0x078f92d32085e, // 2^(43/1024) == 1.02953450827092
    0x07bd42b72a837, // 2^(44/1024) == 1.0302316376860412
    0x07eafa86a2772, // 2^(45/1024) == 1.0309292391488865
    0x0818ba42e7d30, // 2^(46/1024) == 1.0316273129790936
    0x084681ed5a462, // 2^(47/1024) == 1.0323258594965172
    0x0874518759bc9, // 2^(48/1024) == 1.0330248790212286
    0x08a22912465f2, // 2^(49/1024) == 1.033724371873515
    0x08d0088f80940, // 2^(50/1024) == 1.0344243383738814
    0x08fdf00068fe3, // 2^(51/1024) == 1.035124778843049
    0x092bdf66607e0, // 2^(52/1024) == 1.0358256936019572
    0x0959d6c2c830e, // 2^(53/1024) == 1.0365270829717619
    0x0987d61701716, // 2^(54/1024) == 1.0372289472738365
    0x09b5dd646dd77, // 2^(55/1024) == 1.0379312868297725
    0x09e3ecac6f384, // 2^(56/1024) == 1.038634101961379
    0x0a1203f067a64, // 2^(57/1024) == 1.0393373929906824
    0x0a402331b9716, // 2^(58/1024) == 1.040041160239928
    0x0a6e4a71c726e, // 2^(59/1024) == 1.0407454040315787
    0x0a9c79b1f391a, // 2^(60/1024) == 1.0414501246883163
    0x0acab0f3a1b9c, // 2^(61/1024) == 1.0421553225330404
    0x0af8f03834e53, // 2^(62/1024) == 1.04286099788887
    0x0b27378110974, // 2^(63/1024) == 1.0435671510791424
    0x0b5586cf98910, // 2^(64/1024) == 1.044273782427414
    0x0b83de2530d12, // 2^(65/1024) == 1.0449808922574602
    0x0bb23d833d93f, // 2^(66/1024) == 1.0456884808932754
    0x0be0a4eb2353c, // 2^(67/1024) == 1.0463965486590743
    0x0c0f145e46c86, // 2^(68/1024) == 1.04710509587929
    0x0c3d8bde0ce7a, // 2^(69/1024) == 1.047814122878576
    0x0c6c0b6bdae53, // 2^(70/1024) == 1.0485236299818055
    0x0c9a93091632a, // 2^(71/1024) == 1.0492336175140715
    0x0cc922b7247f8, // 2^(72/1024) == 1.0499440858006874
    0x0cf7ba776bb95, // 2^(73/1024) == 1.0506550351671866
    0x0d265a4b520ba, // 2^(74/1024) == 1.051366465939323
    0x0d5502343de03, // 2^(75/1024) == 1.0520783784430712
    0x0d83b23395dec, // 2^(76/1024) == 1.0527907730046264
    0x0db26a4ac0ed5, // 2^(77/1024) == 1.053503649950405
    0x0de12a7b26301, // 2^(78/1024) == 1.0542170096070438
    0x0e0ff2c62d097, // 2^(79/1024) == 1.0549308523014014
    0x0e3ec32d3d1a3, // 2^(80/1024) == 1.0556451783605574
    0x0e6d9bb1be415, // 2^(81/1024) == 1.0563599881118126
    0x0e9c7c55189c7, // 2^(82/1024) == 1.0570752818826905
    0x0ecb6518b4875, // 2^(83/1024) == 1.057791060000935
    0x0efa55fdfa9c5, // 2^(84/1024) == 1.0585073227945128
    0x0f294f0653b46, // 2^(85/1024) == 1.0592240705916125
    0x0f58503328e6d, // 2^(86/1024) == 1.0599413037206447
    0x0f875985e389c, // 2^(87/1024) == 1.0606590225102428
    0x0fb66affed31b, // 2^(88/1024) == 1.061377227289262
    0x0fe584a2afb22, // 2^(89/1024) == 1.0620959183867815
    0x1014a66f951cf, // 2^(90/1024) == 1.0628150961321017
    0x1043d06807c30, // 2^(91/1024) == 1.063534760854747
    0x1073028d7233f, // 2^(92/1024) == 1.0642549128844647
    0x10a23ce13f3e3, // 2^(93/1024) == 1.0649755525512254
    0x10d17f64d9ef2, // 2^(94/1024) == 1.0656966801852232
    0x1100ca19ad930, // 2^(95/1024) == 1.0664182961168756
    0x11301d0125b51, // 2^(96/1024) == 1.0671404006768237
    0x115f781cae1fb, // 2^(97/1024) == 1.0678629941959332
    0x118edb6db2dc1, // 2^(98/1024) == 1.0685860770052928
    0x11be46f5a032d, // 2^(99/1024) == 1.0693096494362166
    0x11edbab5e2ab6, // 2^(100/1024) == 1.0700337118202419
    0x121d36afe70ca, // 2^(101/1024) == 1.0707582644891311
    0x124cbae51a5c8, // 2^(102/1024) == 1.071483307774871
    0x127c4756e9e06, // 2^(103/1024) == 1.0722088420096738
    0x12abdc06c31cc, // 2^(104/1024) == 1.0729348675259756
    0x12db78f613d5c, // 2^(105/1024) == 1.0736613846564387
    0x130b1e264a0e9, // 2^(106/1024) == 1.0743883937339496
    0x133acb98d40a2, // 2^(107/1024) == 1.075115895091621
    0x136a814f204ab, // 2^(108/1024) == 1.075843889062791
    0x139a3f4a9d923, // 2^(109/1024) == 1.0765723759810235
    0x13ca058cbae1e, // 2^(110/1024) == 1.0773013561801075
    0x13f9d416e77af, // 2^(111/1024) == 1.078030829994059
    0x1429aaea92de0, // 2^(112/1024) == 1.0787607977571199
    0x14598a092ccb8, // 2^(113/1024) == 1.079491259803758
    0x1489717425438, // 2^(114/1024) == 1.080222216468668
    0x14b9612cec861, // 2^(115/1024) == 1.080953668086771
    0x14e95934f312e, // 2^(116/1024) == 1.0816856149932152
    0x1519598da9a9a, // 2^(117/1024) == 1.0824180575233755
    0x154962388149f, // 2^(118/1024) == 1.083150996012854
    0x15797336eb333, // 2^(119/1024) == 1.0838844307974795
    0x15a98c8a58e52, // 2^(120/1024) == 1.0846183622133094
    0x15d9ae343c1f3, // 2^(121/1024) == 1.0853527905966274
    0x1609d83606e12, // 2^(122/1024) == 1.0860877162839455
    0x163a0a912b6ad, // 2^(123/1024) == 1.0868231396120038
    0x166a45471c3c3, // 2^(124/1024) == 1.0875590609177699
    0x169a88594c158, // 2^(125/1024) == 1.0882954805384397
    0x16cad3c92df74, // 2^(126/1024) == 1.0890323988114377
    0x16fb279835224, // 2^(127/1024) == 1.0897698160744165
    0x172b83c7d517b, // 2^(128/1024) == 1.0905077326652577
    0x175be85981993, // 2^(129/1024) == 1.0912461489220717
    0x178c554eaea8a, // 2^(130/1024) == 1.0919850651831973
    0x17bccaa8d0889, // 2^(131/1024) == 1.0927244817872028
    0x17ed48695bbc1, // 2^(132/1024) == 1.093464399072886
    0x181dce91c506a, // 2^(133/1024) == 1.0942048173792736
    0x184e5d23816c9, // 2^(134/1024) == 1.0949457370456221
    0x187ef4200632b, // 2^(135/1024) == 1.0956871584114178
    0x18af9388c8dea, // 2^(136/1024) == 1.0964290818163769
    0x18e03b5f3f36b, // 2^(137/1024) == 1.0971715076004454
    0x1910eba4df420, // 2^(138/1024) == 1.0979144361037996
    0x1941a45b1f488, // 2^(139/1024) == 1.0986578676668461
    0x1972658375d30, // 2^(140/1024) == 1.0994018026302221
    0x19a32f1f59ab5, // 2^(141/1024) == 1.1001462413347955
    0x19d4013041dc2, // 2^(142/1024) == 1.1008911841216649
    0x1a04dbb7a5b13, // 2^(143/1024) == 1.1016366313321597
    0x1a35beb6fcb76, // 2^(144/1024) == 1.1023825833078411
    0x1a66aa2fbebc7, // 2^(145/1024) == 1.1031290403905005
    0x1a979e2363cf9, // 2^(146/1024) == 1.103876002922162
    0x1ac89a936440d, // 2^(147/1024) == 1.1046234712450798
    0x1af99f8138a1d, // 2^(148/1024) == 1.1053714457017414
    0x1b2aacee59c53, // 2^(149/1024) == 1.1061199266348651
    0x1b5bc2dc40bf1, // 2^(150/1024) == 1.106868914387402
    0x1b8ce14c66e4d, // 2^(151/1024) == 1.1076184093025347
    0x1bbe084045cd4, // 2^(152/1024) == 1.1083684117236787
    0x1bef37b95750c, // 2^(153/1024) == 1.1091189219944821
    0x1c206fb915890, // 2^(154/1024) == 1.1098699404588253
    0x1c51b040fad16, // 2^(155/1024) == 1.1106214674608217
    0x1c82f95281c6c, // 2^(156/1024) == 1.1113735033448178
    0x1cb44aef2547b, // 2^(157/1024) == 1.1121260484553932
    0x1ce5a51860746, // 2^(158/1024) == 1.1128791031373608
    0x1d1707cfaeaed, // 2^(159/1024) == 1.1136326677357673
    0x1d4873168b9ab, // 2^(160/1024) == 1.1143867425958927
    0x1d79e6ee731d7, // 2^(161/1024) == 1.1151413280632505
    0x1dab6358e15e8, // 2^(162/1024) == 1.115896424483589
    0x1ddce85752c72, // 2^(163/1024) == 1.1166520322028899
    0x1e0e75eb44027, // 2^(164/1024) == 1.1174081515673693
    0x1e400c1631fdc, // 2^(165/1024) == 1.1181647829234782
    0x1e71aad999e83, // 2^(166/1024) == 1.1189219266179016
    0x1ea35236f9331, // 2^(167/1024) == 1.1196795829975594
    0x1ed5022fcd91d, // 2^(168/1024) == 1.1204377524096067
    0x1f06bac594fa1, // 2^(169/1024) == 1.1211964352014336
    0x1f387bf9cda39, // 2^(170/1024) == 1.1219556317206651
    0x1f6a45cdf6086, // 2^(171/1024) == 1.122715342315162
    0x1f9c18438ce4d, // 2^(172/1024) == 1.12347556733302
    0x1fcdf35c1137a, // 2^(173/1024) == 1.1242363071225712
    0x1fffd7190241f, // 2^(174/1024) == 1.1249975620323835
    0x2031c37bdf873, // 2^(175/1024) == 1.1257593324112605
    0x2063b88628cd7, // 2^(176/1024) == 1.126521618608242
    0x2095b6395e1d3, // 2^(177/1024) == 1.1272844209726045
    0x20c7bc96ffc18, // 2^(178/1024) == 1.1280477398538604
    0x20f9cba08e484, // 2^(179/1024) == 1.1288115756017598
    0x212be3578a81a, // 2^(180/1024) == 1.1295759285662883
    0x215e03bd7580d, // 2^(181/1024) == 1.1303407990976695
    0x21902cd3d09b9, // 2^(182/1024) == 1.1311061875463635
    0x21c25e9c1d6aa, // 2^(183/1024) == 1.1318720942630685
    0x21f49917ddc97, // 2^(184/1024) == 1.1326385195987194
    0x2226dc4893d64, // 2^(185/1024) == 1.1334054639044888
    0x2259282fc1f28, // 2^(186/1024) == 1.1341729275317878
    0x228b7cceeac25, // 2^(187/1024) == 1.1349409108322643
    0x22bdda27912d2, // 2^(188/1024) == 1.1357094141578057
    0x22f0403b385d3, // 2^(189/1024) == 1.1364784378605364
    0x2322af0b63c00, // 2^(190/1024) == 1.1372479822928199
    0x2355269997062, // 2^(191/1024) == 1.138018047807258
    0x2387a6e756239, // 2^(192/1024) == 1.1387886347566918
    0x23ba2ff6254f4, // 2^(193/1024) == 1.1395597434942006
    0x23ecc1c78903a, // 2^(194/1024) == 1.1403313743731034
    0x241f5c5d05fe6, // 2^(195/1024) == 1.141103527746958
    0x2451ffb82140b, // 2^(196/1024) == 1.1418762039695618
    0x2484abda600f0, // 2^(197/1024) == 1.1426494033949517
    0x24b760c547f16, // 2^(198/1024) == 1.1434231263774044
    0x24ea1e7a5eb35, // 2^(199/1024) == 1.1441973732714363
    0x251ce4fb2a640, // 2^(200/1024) == 1.1449721444318044
    0x254fb44931561, // 2^(201/1024) == 1.145747440213505
    0x25828c65fa200, // 2^(202/1024) == 1.146523260971776
    0x25b56d530b9bd, // 2^(203/1024) == 1.1472996070620944
    0x25e85711ece76, // 2^(204/1024) == 1.1480764788401792
    0x261b49a425645, // 2^(205/1024) == 1.1488538766619893
    0x264e450b3cb82, // 2^(206/1024) == 1.1496318008837254
    0x26814948bacc3, // 2^(207/1024) == 1.1504102518618289
    0x26b4565e27cde, // 2^(208/1024) == 1.151189229952983
    0x26e76c4d0c2e6, // 2^(209/1024) == 1.1519687355141115
    0x271a8b16f0a30, // 2^(210/1024) == 1.1527487689023808
    0x274db2bd5e254, // 2^(211/1024) == 1.153529330475199
    0x2780e341ddf2a, // 2^(212/1024) == 1.1543104205902162
    0x27b41ca5f98cc, // 2^(213/1024) == 1.1550920396053241
    0x27e75eeb3ab99, // 2^(214/1024) == 1.1558741878786576
    0x281aaa132b833, // 2^(215/1024) == 1.1566568657685934
    0x284dfe1f56381, // 2^(216/1024) == 1.1574400736337511
    0x28815b11456b1, // 2^(217/1024) == 1.1582238118329935
    0x28b4c0ea83f36, // 2^(218/1024) == 1.159008080725426
    0x28e82fac9ceca, // 2^(219/1024) == 1.159792880670397
    0x291ba7591bb70, // 2^(220/1024) == 1.1605782120274988
    0x294f27f18bf73, // 2^(221/1024) == 1.1613640751565668
    0x2982b17779966, // 2^(222/1024) == 1.16215047041768
    0x29b643ec70c28, // 2^(223/1024) == 1.1629373981711613
    0x29e9df51fdee2, // 2^(224/1024) == 1.1637248587775777
    0x2a1d83a9add08, // 2^(225/1024) == 1.1645128525977402
    0x2a5130f50d65c, // 2^(226/1024) == 1.1653013799927043
    0x2a84e735a9eec, // 2^(227/1024) == 1.16609044132377
    0x2ab8a66d10f13, // 2^(228/1024) == 1.1668800369524817
    0x2aec6e9cd037c, // 2^(229/1024) == 1.1676701672406287
    0x2b203fc675d20, // 2^(230/1024) == 1.1684608325502452
    0x2b5419eb90148, // 2^(231/1024) == 1.1692520332436107
    0x2b87fd0dad990, // 2^(232/1024) == 1.1700437696832502
    0x2bbbe92e5d3e4, // 2^(233/1024) == 1.170836042231934
    0x2befde4f2e281, // 2^(234/1024) == 1.1716288512526776
    0x2c23dc71afbf8, // 2^(235/1024) == 1.1724221971087427
    0x2c57e39771b2f, // 2^(236/1024) == 1.1732160801636373
    0x2c8bf3c203f60, // 2^(237/1024) == 1.1740105007811152
    0x2cc00cf2f6c18, // 2^(238/1024) == 1.1748054593251762
    0x2cf42f2bda93e, // 2^(239/1024) == 1.1756009561600673
    0x2d285a6e4030c, // 2^(240/1024) == 1.1763969916502814
    0x2d5c8ebbb8a16, // 2^(241/1024) == 1.1771935661605588
    0x2d90cc15d5347, // 2^(242/1024) == 1.1779906800558864
    0x2dc5127e277e3, // 2^(243/1024) == 1.1787883337014982
    0x2df961f64158a, // 2^(244/1024) == 1.179586527462876
    0x2e2dba7fb4e33, // 2^(245/1024) == 1.1803852617057486
    0x2e621c1c14834, // 2^(246/1024) == 1.181184536796093
    0x2e9686ccf2e3b, // 2^(247/1024) == 1.1819843531001328
    0x2ecafa93e2f57, // 2^(248/1024) == 1.1827847109843412
    0x2eff777277ef1, // 2^(249/1024) == 1.1835856108154383
    0x2f33fd6a454d2, // 2^(250/1024) == 1.184387052960393
    0x2f688c7cded23, // 2^(251/1024) == 1.185189037786423
    0x2f9d24abd886b, // 2^(252/1024) == 1.1859915656609938
    0x2fd1c5f8c6b93, // 2^(253/1024) == 1.1867946369518207
    0x300670653dfe5, // 2^(254/1024) == 1.1875982520268675
    0x303b23f2d330b, // 2^(255/1024) == 1.1884024112543468
    0x306fe0a31b716, // 2^(256/1024) == 1.1892071150027212
    0x30a4a677ac277, // 2^(257/1024) == 1.1900123636407025
    0x30d975721b005, // 2^(258/1024) == 1.190818157537252
    0x310e4d93fdefc, // 2^(259/1024) == 1.1916244970615812
    0x31432edeeb2fe, // 2^(260/1024) == 1.1924313825831514
    0x3178195479413, // 2^(261/1024) == 1.193238814471674
    0x31ad0cf63eeac, // 2^(262/1024) == 1.1940467930971108
    0x31e209c5d33a0, // 2^(263/1024) == 1.1948553188296742
    0x32170fc4cd832, // 2^(264/1024) == 1.1956643920398276
    0x324c1ef4c560b, // 2^(265/1024) == 1.1964740130982843
    0x3281375752b40, // 2^(266/1024) == 1.1972841823760092
    0x32b658ee0da54, // 2^(267/1024) == 1.198094900244219
    0x32eb83ba8ea32, // 2^(268/1024) == 1.1989061670743806
    0x3320b7be6e634, // 2^(269/1024) == 1.1997179832382132
    0x3355f4fb45e21, // 2^(270/1024) == 1.2005303491076875
    0x338b3b72ae62e, // 2^(271/1024) == 1.201343265055026
    0x33c08b2641700, // 2^(272/1024) == 1.2021567314527033
    0x33f5e41798dab, // 2^(273/1024) == 1.2029707486734462
    0x342b46484ebb4, // 2^(274/1024) == 1.203785317090234
    0x3460b1b9fd712, // 2^(275/1024) == 1.2046004370762984
    0x3496266e3fa2d, // 2^(276/1024) == 1.2054161090051239
    0x34cba466b03e1, // 2^(277/1024) == 1.2062323332504479
    0x35012ba4ea77d, // 2^(278/1024) == 1.2070491101862608
    0x3536bc2a89cc5, // 2^(279/1024) == 1.2078664401868064
    0x356c55f929ff1, // 2^(280/1024) == 1.2086843236265816
    0x35a1f912671b2, // 2^(281/1024) == 1.2095027608803375
    0x35d7a577dd72c, // 2^(282/1024) == 1.210321752323078
    0x360d5b2b299fd, // 2^(283/1024) == 1.2111412983300618
    0x36431a2de883b, // 2^(284/1024) == 1.2119613992768012
    0x3678e281b7476, // 2^(285/1024) == 1.2127820555390634
    0x36aeb428335b5, // 2^(286/1024) == 1.213603267492869
    0x36e48f22fa77c, // 2^(287/1024) == 1.2144250355144939
    0x371a7373aa9cb, // 2^(288/1024) == 1.215247359980469
    0x3750611be211d, // 2^(289/1024) == 1.2160702412675797
    0x3786581d3f669, // 2^(290/1024) == 1.2168936797528664
    0x37bc587961727, // 2^(291/1024) == 1.2177176758136257
    0x37f26231e754a, // 2^(292/1024) == 1.2185422298274085
    0x3828754870747, // 2^(293/1024) == 1.2193673421720221
    0x385e91be9c812, // 2^(294/1024) == 1.2201930132255296
    0x3894b7960b71f, // 2^(295/1024) == 1.2210192433662497
    0x38cae6d05d866, // 2^(296/1024) == 1.2218460329727576
    0x39011f6f33460, // 2^(297/1024) == 1.222673382423885
    0x393761742d809, // 2^(298/1024) == 1.2235012920987194
    0x396dace0ed4e1, // 2^(299/1024) == 1.2243297623766056
    0x39a401b7140ef, // 2^(300/1024) == 1.2251587936371455
    0x39da5ff8436bd, // 2^(301/1024) == 1.2259883862601975
    0x3a10c7a61d55c, // 2^(302/1024) == 1.2268185406258771
    0x3a4738c244064, // 2^(303/1024) == 1.2276492571145576
    0x3a7db34e59ff7, // 2^(304/1024) == 1.22848053610687
    0x3ab4374c020be, // 2^(305/1024) == 1.2293123779837027
    0x3aeac4bcdf3ea, // 2^(306/1024) == 1.2301447831262018
    0x3b215ba294f3a, // 2^(307/1024) == 1.230977751915772
    0x3b57fbfec6cf5, // 2^(308/1024) == 1.231811284734076
    0x3b8ea5d318bef, // 2^(309/1024) == 1.232645381963035
    0x3bc559212ef89, // 2^(310/1024) == 1.2334800439848286
    0x3bfc15eaadfb2, // 2^(311/1024) == 1.2343152711818957
    0x3c32dc313a8e5, // 2^(312/1024) == 1.2351510639369334
    0x3c69abf679c2e, // 2^(313/1024) == 1.2359874226328986
    0x3ca0853c10f29, // 2^(314/1024) == 1.2368243476530074
    0x3cd76803a5c01, // 2^(315/1024) == 1.237661839380735
    0x3d0e544ede174, // 2^(316/1024) == 1.2384998981998168
    0x3d454a1f602d1, // 2^(317/1024) == 1.2393385244942474
    0x3d7c4976d27fa, // 2^(318/1024) == 1.2401777186482819
    0x3db35256dbd68, // 2^(319/1024) == 1.2410174810464358
    0x3dea64c123423, // 2^(320/1024) == 1.2418578120734842
    0x3e2180b7501cc, // 2^(321/1024) == 1.2426987121144633
    0x3e58a63b0a09b, // 2^(322/1024) == 1.24354018155467
    0x3e8fd54df8f5c, // 2^(323/1024) == 1.244382220779662
    0x3ec70df1c5175, // 2^(324/1024) == 1.245224830175258
    0x3efe502816ee4, // 2^(325/1024) == 1.246068010127538
    0x3f359bf29743f, // 2^(326/1024) == 1.2469117610228435
    0x3f6cf152ef2b8, // 2^(327/1024) == 1.2477560832477774
    0x3fa4504ac801c, // 2^(328/1024) == 1.2486009771892048
    0x3fdbb8dbcb6d2, // 2^(329/1024) == 1.2494464432342522
    0x40132b07a35df, // 2^(330/1024) == 1.2502924817703087
    0x404aa6cffa0e6, // 2^(331/1024) == 1.2511390931850257
    0x40822c367a025, // 2^(332/1024) == 1.2519862778663164
    0x40b9bb3cce07c, // 2^(333/1024) == 1.2528340362023576
    0x40f153e4a136a, // 2^(334/1024) == 1.2536823685815883
    0x4128f62f9ef0f, // 2^(335/1024) == 1.2545312753927111
    0x4160a21f72e2a, // 2^(336/1024) == 1.255380757024691
    0x419857b5c9020, // 2^(337/1024) == 1.2562308138667575
    0x41d016f44d8f5, // 2^(338/1024) == 1.2570814463084024
    0x4207dfdcad154, // 2^(339/1024) == 1.257932654739382
    0x423fb2709468a, // 2^(340/1024) == 1.2587844395497165
    0x42778eb1b0a8b, // 2^(341/1024) == 1.25963680112969
    0x42af74a1af3f2, // 2^(342/1024) == 1.260489739869851
    0x42e764423ddfd, // 2^(343/1024) == 1.2613432561610118
    0x431f5d950a897, // 2^(344/1024) == 1.2621973503942507
    0x4357609bc3851, // 2^(345/1024) == 1.26305202296091
    0x438f6d5817663, // 2^(346/1024) == 1.263907274252596
    0x43c783cbb50b5, // 2^(347/1024) == 1.2647631046611825
    0x43ffa3f84b9d5, // 2^(348/1024) == 1.2656195145788065
    0x4437cddf8a8fe, // 2^(349/1024) == 1.2664765043978714
    0x4470018321a1a, // 2^(350/1024) == 1.2673340745110466
    0x44a83ee4c0dbe, // 2^(351/1024) == 1.268192225311267
    0x44e086061892e, // 2^(352/1024) == 1.2690509571917334
    0x4518d6e8d965c, // 2^(353/1024) == 1.269910270545913
    0x4551318eb43ec, // 2^(354/1024) == 1.2707701657675399
    0x458995f95a532, // 2^(355/1024) == 1.2716306432506141
    0x45c2042a7d232, // 2^(356/1024) == 1.2724917033894028
    0x45fa7c23ce7a5, // 2^(357/1024) == 1.2733533465784401
    0x4632fde7006f4, // 2^(358/1024) == 1.274215573212527
    0x466b8975c563f, // 2^(359/1024) == 1.2750783836867325
    0x46a41ed1d0058, // 2^(360/1024) == 1.2759417783963922
    0x46dcbdfcd34c9, // 2^(361/1024) == 1.2768057577371101
    0x471566f8827d0, // 2^(362/1024) == 1.2776703221047576
    0x474e19c691266, // 2^(363/1024) == 1.278535471895475
    0x4786d668b3237, // 2^(364/1024) == 1.2794012075056693
    0x47bf9ce09c9ac, // 2^(365/1024) == 1.2802675293320176
    0x47f86d3001fe6, // 2^(366/1024) == 1.2811344377714646
    0x48314758980bf, // 2^(367/1024) == 1.2820019332212238
    0x486a2b5c13cd1, // 2^(368/1024) == 1.2828700160787785
    0x48a3193c2a96c, // 2^(369/1024) == 1.2837386867418799
    0x48dc10fa920a2, // 2^(370/1024) == 1.2846079456085495
    0x4915129900140, // 2^(371/1024) == 1.285477793077078
    0x494e1e192aed2, // 2^(372/1024) == 1.2863482295460256
    0x4987337cc91a5, // 2^(373/1024) == 1.2872192554142228
    0x49c052c5916c5, // 2^(374/1024) == 1.28809087108077
    0x49f97bf53affd, // 2^(375/1024) == 1.288963076945037
    0x4a32af0d7d3df, // 2^(376/1024) == 1.289835873406666
    0x4a6bec100fdbb, // 2^(377/1024) == 1.2907092608655677
    0x4aa532feaada6, // 2^(378/1024) == 1.2915832397219247
    0x4ade83db0687b, // 2^(379/1024) == 1.2924578103761906
    0x4b17dea6db7d7, // 2^(380/1024) == 1.2933329732290895
    0x4b514363e2a21, // 2^(381/1024) == 1.2942087286816177
    0x4b8ab213d5283, // 2^(382/1024) == 1.2950850771350424
    0x4bc42ab86c8f1, // 2^(383/1024) == 1.2959620189909027
    0x4bfdad5362a28, // 2^(384/1024) == 1.2968395546510099
    0x4c3739e6717ab, // 2^(385/1024) == 1.2977176845174465
    0x4c70d073537cb, // 2^(386/1024) == 1.2985964089925683
    0x4caa70fbc35a1, // 2^(387/1024) == 1.2994757284790028
    0x4ce41b817c115, // 2^(388/1024) == 1.3003556433796508
    0x4d1dd00638ed8, // 2^(389/1024) == 1.3012361540976851
    0x4d578e8bb586c, // 2^(390/1024) == 1.3021172610365523
    0x4d915713adc1f, // 2^(391/1024) == 1.3029989645999718
    0x4dcb299fddd0e, // 2^(392/1024) == 1.303881265191936
    0x4e05063202328, // 2^(393/1024) == 1.3047641632167117
    0x4e3eeccbd7b2b, // 2^(394/1024) == 1.3056476590788388
    0x4e78dd6f1b6a7, // 2^(395/1024) == 1.3065317531831313
    0x4eb2d81d8abff, // 2^(396/1024) == 1.3074164459346773
    0x4eecdcd8e366a, // 2^(397/1024) == 1.3083017377388395
    0x4f26eba2e35f1, // 2^(398/1024) == 1.3091876290012545
    0x4f61047d48f74, // 2^(399/1024) == 1.310074120127834
    0x4f9b2769d2ca7, // 2^(400/1024) == 1.3109612115247644
    0x4fd5546a3fc17, // 2^(401/1024) == 1.3118489035985073
    0x500f8b804f127, // 2^(402/1024) == 1.3127371967557993
    0x5049ccadc0413, // 2^(403/1024) == 1.3136260914036526
    0x508417f4531ef, // 2^(404/1024) == 1.3145155879493549
    0x50be6d55c7caa, // 2^(405/1024) == 1.3154056868004695
    0x50f8ccd3deb0d, // 2^(406/1024) == 1.316296388364836
    0x51333670588c0, // 2^(407/1024) == 1.3171876930505704
    0x516daa2cf6642, // 2^(408/1024) == 1.318079601266064
    0x51a8280b798f5, // 2^(409/1024) == 1.318972113419986
    0x51e2b00da3b14, // 2^(410/1024) == 1.3198652299212812
    0x521d423536bbe, // 2^(411/1024) == 1.320758951179172
    0x5257de83f4eef, // 2^(412/1024) == 1.3216532776031575
    0x529284fba0d85, // 2^(413/1024) == 1.3225482096030146
    0x52cd359dfd53d, // 2^(414/1024) == 1.3234437475887966
    0x5307f06ccd8bb, // 2^(415/1024) == 1.3243398919708358
    0x5342b569d4f82, // 2^(416/1024) == 1.3252366431597413
    0x537d8496d75fd, // 2^(417/1024) == 1.3261340015664012
    0x53b85df598d78, // 2^(418/1024) == 1.3270319676019806
    0x53f34187ddc28, // 2^(419/1024) == 1.3279305416779241
    0x542e2f4f6ad28, // 2^(420/1024) == 1.3288297242059546
    0x5469274e05079, // 2^(421/1024) == 1.3297295155980733
    0x54a4298571b06, // 2^(422/1024) == 1.330629916266561
    0x54df35f7766a4, // 2^(423/1024) == 1.3315309266239774
    0x551a4ca5d920f, // 2^(424/1024) == 1.3324325470831615
    0x55556d92600f2, // 2^(425/1024) == 1.3333347780572322
    0x559098bed1be0, // 2^(426/1024) == 1.3342376199595876
    0x55cbce2cf505b, // 2^(427/1024) == 1.335141073203906
    0x56070dde910d2, // 2^(428/1024) == 1.3360451382041458
    0x564257d56d4a3, // 2^(429/1024) == 1.336949815374546
    0x567dac1351819, // 2^(430/1024) == 1.3378551051296255
    0x56b90a9a05c72, // 2^(431/1024) == 1.3387610078841843
    0x56f4736b527db, // 2^(432/1024) == 1.3396675240533031
    0x572fe68900573, // 2^(433/1024) == 1.3405746540523438
    0x576b63f4d854d, // 2^(434/1024) == 1.3414823982969495
    0x57a6ebb0a3c6e, // 2^(435/1024) == 1.3423907572030447
    0x57e27dbe2c4cf, // 2^(436/1024) == 1.3432997311868353
    0x581e1a1f3bd61, // 2^(437/1024) == 1.3442093206648098
    0x5859c0d59ca08, // 2^(438/1024) == 1.3451195260537379
    0x589571e3193a0, // 2^(439/1024) == 1.3460303477706717
    0x58d12d497c7fe, // 2^(440/1024) == 1.346941786232946
    0x590cf30a919ed, // 2^(441/1024) == 1.3478538418581778
    0x5948c32824135, // 2^(442/1024) == 1.3487665150642674
    0x59849da3ffa96, // 2^(443/1024) == 1.3496798062693975
    0x59c0827ff07cc, // 2^(444/1024) == 1.3505937158920345
    0x59fc71bdc2f8f, // 2^(445/1024) == 1.3515082443509276
    0x5a386b5f43d93, // 2^(446/1024) == 1.3524233920651099
    0x5a746f664028b, // 2^(447/1024) == 1.353339159453898
    0x5ab07dd48542a, // 2^(448/1024) == 1.3542555469368929
    0x5aec96abe0d20, // 2^(449/1024) == 1.3551725549339793
    0x5b28b9ee20d1e, // 2^(450/1024) == 1.356090183865326
    0x5b64e79d138d8, // 2^(451/1024) == 1.3570084341513873
    0x5ba11fba87a03, // 2^(452/1024) == 1.3579273062129011
    0x5bdd62484bf57, // 2^(453/1024) == 1.358846800470891
    0x5c19af482fc8f, // 2^(454/1024) == 1.3597669173466647
    0x5c5606bc02a6d, // 2^(455/1024) == 1.3606876572618163
    0x5c9268a5946b8, // 2^(456/1024) == 1.361609020638225
    0x5cced506b543b, // 2^(457/1024) == 1.362531007898055
    0x5d0b4be135acc, // 2^(458/1024) == 1.3634536194637574
    0x5d47cd36e6747, // 2^(459/1024) == 1.3643768557580687
    0x5d84590998b93, // 2^(460/1024) == 1.365300717204012
    0x5dc0ef5b1de9f, // 2^(461/1024) == 1.3662252042248964
    0x5dfd902d47c65, // 2^(462/1024) == 1.3671503172443178
    0x5e3a3b81e85ed, // 2^(463/1024) == 1.3680760566861594
    0x5e76f15ad2149, // 2^(464/1024) == 1.3690024229745907
    0x5eb3b1b9d799a, // 2^(465/1024) == 1.369929416534069
    0x5ef07ca0cbf10, // 2^(466/1024) == 1.3708570377893388
    0x5f2d5211826e8, // 2^(467/1024) == 1.371785287165432
    0x5f6a320dceb71, // 2^(468/1024) == 1.3727141650876684
    0x5fa71c9784c0b, // 2^(469/1024) == 1.3736436719816563
    0x5fe411b078d27, // 2^(470/1024) == 1.3745738082732915
    0x6021115a7f849, // 2^(471/1024) == 1.3755045743887584
    0x605e1b976dc09, // 2^(472/1024) == 1.3764359707545302
    0x609b306918c14, // 2^(473/1024) == 1.3773679977973687
    0x60d84fd15612b, // 2^(474/1024) == 1.3783006559443247
    0x611579d1fb926, // 2^(475/1024) == 1.379233945622738
    0x6152ae6cdf6f5, // 2^(476/1024) == 1.3801678672602382
    0x618feda3d829f, // 2^(477/1024) == 1.381102421284744
    0x61cd3778bc945, // 2^(478/1024) == 1.3820376081244643
    0x620a8bed63d20, // 2^(479/1024) == 1.3829734282078974
    0x6247eb03a5585, // 2^(480/1024) == 1.383909881963832
    0x628554bd58ee6, // 2^(481/1024) == 1.3848469698213477
    0x62c2c91c56ace, // 2^(482/1024) == 1.3857846922098136
    0x6300482276fe9, // 2^(483/1024) == 1.3867230495588905
    0x633dd1d1929fe, // 2^(484/1024) == 1.3876620422985293
    0x637b662b829f6, // 2^(485/1024) == 1.3886016708589728
    0x63b90532205d8, // 2^(486/1024) == 1.3895419356707546
    0x63f6aee7458cd, // 2^(487/1024) == 1.3904828371647
    0x6434634ccc320, // 2^(488/1024) == 1.3914243757719262
    0x647222648ea3e, // 2^(489/1024) == 1.3923665519238422
    0x64afec30678b7, // 2^(490/1024) == 1.3933093660521487
    0x64edc0b231e41, // 2^(491/1024) == 1.3942528185888394
    0x652b9febc8fb7, // 2^(492/1024) == 1.3951969099662003
    0x656989df08719, // 2^(493/1024) == 1.3961416406168097
    0x65a77e8dcc390, // 2^(494/1024) == 1.3970870109735394
    0x65e57df9f096c, // 2^(495/1024) == 1.398033021469554
    0x6623882552225, // 2^(496/1024) == 1.3989796725383112
    0x66619d11cdc5f, // 2^(497/1024) == 1.3999269646135628
    0x669fbcc140be8, // 2^(498/1024) == 1.400874898129354
    0x66dde735889b8, // 2^(499/1024) == 1.4018234735200235
    0x671c1c70833f6, // 2^(500/1024) == 1.4027726912202048
    0x675a5c740edf5, // 2^(501/1024) == 1.4037225516648253
    0x6798a7420a036, // 2^(502/1024) == 1.404673055289107
    0x67d6fcdc5386b, // 2^(503/1024) == 1.4056242025285666
    0x68155d44ca974, // 2^(504/1024) == 1.4065759938190157
    0x6853c87d4eb62, // 2^(505/1024) == 1.4075284295965607
    0x68923e87bfb7b, // 2^(506/1024) == 1.408481510297604
    0x68d0bf65fdc34, // 2^(507/1024) == 1.409435236358843
    0x690f4b19e9539, // 2^(508/1024) == 1.4103896082172709
    0x694de1a563367, // 2^(509/1024) == 1.4113446263101765
    0x698c830a4c8d4, // 2^(510/1024) == 1.4123002910751454
    0x69cb2f4a86ccb, // 2^(511/1024) == 1.413256602950059
    0x6a09e667f3bcd, // 2^(512/1024) == 1.4142135623730951
    0x6a48a86475796, // 2^(513/1024) == 1.4151711697827287
    0x6a877541ee719, // 2^(514/1024) == 1.4161294256177313
    0x6ac64d0241683, // 2^(515/1024) == 1.4170883303171713
    0x6b052fa75173f, // 2^(516/1024) == 1.4180478843204154
    0x6b441d3301fef, // 2^(517/1024) == 1.4190080880671265
    0x6b8315a736c75, // 2^(518/1024) == 1.419968941997266
    0x6bc21905d3df1, // 2^(519/1024) == 1.4209304465510935
    0x6c012750bdabf, // 2^(520/1024) == 1.4218926021691656
    0x6c404089d8e7e, // 2^(521/1024) == 1.4228554092923384
    0x6c7f64b30aa09, // 2^(522/1024) == 1.4238188683617656
    0x6cbe93ce38381, // 2^(523/1024) == 1.4247829798189005
    0x6cfdcddd47646, // 2^(524/1024) == 1.4257477441054944
    0x6d3d12e21e2fc, // 2^(525/1024) == 1.4267131616635984
    0x6d7c62dea2f8b, // 2^(526/1024) == 1.4276792329355625
    0x6dbbbdd4bc721, // 2^(527/1024) == 1.4286459583640367
    0x6dfb23c651a2f, // 2^(528/1024) == 1.42961333839197
    0x6e3a94b549e72, // 2^(529/1024) == 1.4305813734626125
    0x6e7a10a38cee8, // 2^(530/1024) == 1.431550064019513
    0x6eb9979302bde, // 2^(531/1024) == 1.4325194105065218
    0x6ef9298593ae5, // 2^(532/1024) == 1.433489413367789
    0x6f38c67d286dd, // 2^(533/1024) == 1.434460073047766
    0x6f786e7ba9fef, // 2^(534/1024) == 1.4354313899912048
    0x6fb8218301b91, // 2^(535/1024) == 1.4364033646431589
    0x6ff7df9519484, // 2^(536/1024) == 1.4373759974489824
    0x7037a8b3daadc, // 2^(537/1024) == 1.438349288854332
    0x70777ce1303f6, // 2^(538/1024) == 1.4393232393051654
    0x70b75c1f04a85, // 2^(539/1024) == 1.4402978492477427
    0x70f7466f42e88, // 2^(540/1024) == 1.4412731191286259
    0x71373bd3d6552, // 2^(541/1024) == 1.4422490493946793
    0x71773c4eaa988, // 2^(542/1024) == 1.4432256404930701
    0x71b747e1abb25, // 2^(543/1024) == 1.4442028928712685
    0x71f75e8ec5f74, // 2^(544/1024) == 1.4451808069770467
    0x72378057e611b, // 2^(545/1024) == 1.4461593832584814
    0x7277ad3ef9011, // 2^(546/1024) == 1.4471386221639515
    0x72b7e545ec1a9, // 2^(547/1024) == 1.4481185241421406
    0x72f8286ead08a, // 2^(548/1024) == 1.449099089642035
    0x733876bb29cb8, // 2^(549/1024) == 1.4500803191129261
    0x7378d02d50b90, // 2^(550/1024) == 1.451062213004409
    0x73b934c7107c8, // 2^(551/1024) == 1.4520447717663831
    0x73f9a48a58174, // 2^(552/1024) == 1.4530279958490526
    0x743a1f7916e05, // 2^(553/1024) == 1.4540118857029267
    0x747aa5953c849, // 2^(554/1024) == 1.4549964417788195
    0x74bb36e0b906d, // 2^(555/1024) == 1.4559816645278503
    0x74fbd35d7cbfe, // 2^(556/1024) == 1.456967554401444
    0x753c7b0d785e9, // 2^(557/1024) == 1.457954111851331
    0x757d2df29ce7d, // 2^(558/1024) == 1.458941337329548
    0x75bdec0edbb6b, // 2^(559/1024) == 1.4599292312884369
    0x75feb564267c9, // 2^(560/1024) == 1.460917794180647
    0x763f89f46f410, // 2^(561/1024) == 1.4619070264591336
    0x768069c1a861e, // 2^(562/1024) == 1.4628969285771585
    0x76c154cdc4938, // 2^(563/1024) == 1.4638875009882906
    0x77024b1ab6e0a, // 2^(564/1024) == 1.464878744146406
    0x77434caa72aa8, // 2^(565/1024) == 1.465870658505688
    0x7784597eeba8f, // 2^(566/1024) == 1.4668632445206276
    0x77c5719a15ea6, // 2^(567/1024) == 1.4678565026460233
    0x780694fde5d40, // 2^(568/1024) == 1.468850433336982
    0x7847c3ac50219, // 2^(569/1024) == 1.4698450370489182
    0x7888fda749e5e, // 2^(570/1024) == 1.4708403142375555
    0x78ca42f0c88a5, // 2^(571/1024) == 1.471836265358925
    0x790b938ac1cf7, // 2^(572/1024) == 1.4728328908693678
    0x794cef772bcc9, // 2^(573/1024) == 1.473830191225533
    0x798e56b7fcf04, // 2^(574/1024) == 1.4748281668843797
    0x79cfc94f2c000, // 2^(575/1024) == 1.475826818303176
    0x7a11473eb0187, // 2^(576/1024) == 1.4768261459394993
    0x7a52d08880ada, // 2^(577/1024) == 1.477826150251238
    0x7a94652e958aa, // 2^(578/1024) == 1.4788268316965891
    0x7ad60532e6d20, // 2^(579/1024) == 1.479828190734061
    0x7b17b0976cfdb, // 2^(580/1024) == 1.4808302278224719
    0x7b59675e20df0, // 2^(581/1024) == 1.481832943420951
    0x7b9b2988fb9ed, // 2^(582/1024) == 1.4828363379889382
    0x7bdcf719f6bd8, // 2^(583/1024) == 1.4838404119861845
    0x7c1ed0130c133, // 2^(584/1024) == 1.4848451658727526
    0x7c60b47635cf9, // 2^(585/1024) == 1.4858506001090162
    0x7ca2a4456e7a3, // 2^(586/1024) == 1.486856715155661
    0x7ce49f82b0f25, // 2^(587/1024) == 1.487863511473685
    0x7d26a62ff86f1, // 2^(588/1024) == 1.4888709895243972
    0x7d68b84f407f8, // 2^(589/1024) == 1.4898791497694202
    0x7daad5e2850ac, // 2^(590/1024) == 1.4908879926706886
    0x7decfeebc24ff, // 2^(591/1024) == 1.4918975186904502
    0x7e2f336cf4e63, // 2^(592/1024) == 1.492907728291265
    0x7e71736819bce, // 2^(593/1024) == 1.493918621936007
    0x7eb3bedf2e1ba, // 2^(594/1024) == 1.4949302000878633
    0x7ef615d42fa25, // 2^(595/1024) == 1.4959424632103346
    0x7f3878491c491, // 2^(596/1024) == 1.4969554117672355
    0x7f7ae63ff260a, // 2^(597/1024) == 1.4979690462226949
    0x7fbd5fbab0920, // 2^(598/1024) == 1.4989833670411556
    0x7fffe4bb55dec, // 2^(599/1024) == 1.499998374687375
    0x80427543e1a12, // 2^(600/1024) == 1.5010140696264256
    0x80851156538be, // 2^(601/1024) == 1.502030452323694
    0x80c7b8f4abaa9, // 2^(602/1024) == 1.5030475232448828
    0x810a6c20ea617, // 2^(603/1024) == 1.5040652828560093
    0x814d2add106da, // 2^(604/1024) == 1.5050837316234067
    0x818ff52b1ee51, // 2^(605/1024) == 1.5061028700137238
    0x81d2cb0d1736b, // 2^(606/1024) == 1.5071226984939254
    0x8215ac84fb2a6, // 2^(607/1024) == 1.5081432175312925
    0x82589994cce13, // 2^(608/1024) == 1.5091644275934228
    0x829b923e8ed53, // 2^(609/1024) == 1.5101863291482303
    0x82de968443d9b, // 2^(610/1024) == 1.5112089226639458
    0x8321a667ef1b3, // 2^(611/1024) == 1.5122322086091173
    0x8364c1eb941f8, // 2^(612/1024) == 1.51325618745261
    0x83a7e91136c5e, // 2^(613/1024) == 1.5142808596636068
    0x83eb1bdadb46e, // 2^(614/1024) == 1.515306225711608
    0x842e5a4a8634a, // 2^(615/1024) == 1.5163322860664317
    0x8471a4623c7ad, // 2^(616/1024) == 1.5173590411982147
    0x84b4fa24035eb, // 2^(617/1024) == 1.518386491577412
    0x84f85b91e07f2, // 2^(618/1024) == 1.5194146376747963
    0x853bc8add9d4c, // 2^(619/1024) == 1.5204434799614601
    0x857f4179f5b21, // 2^(620/1024) == 1.5214730189088146
    0x85c2c5f83ac36, // 2^(621/1024) == 1.5225032549885902
    0x8606562ab00ed, // 2^(622/1024) == 1.5235341886728364
    0x8649f2135cf49, // 2^(623/1024) == 1.5245658204339227
    0x868d99b4492ed, // 2^(624/1024) == 1.5255981507445384
    0x86d14d0f7cd1e, // 2^(625/1024) == 1.5266311800776928
    0x87150c27004c3, // 2^(626/1024) == 1.5276649089067156
    0x8758d6fcdc666, // 2^(627/1024) == 1.5286993377052567
    0x879cad931a437, // 2^(628/1024) == 1.5297344669472872
    0x87e08febc3609, // 2^(629/1024) == 1.5307702971070987
    0x88247e08e1957, // 2^(630/1024) == 1.531806828659304
    0x886877ec7f144, // 2^(631/1024) == 1.532844062078838
    0x88ac7d98a669a, // 2^(632/1024) == 1.5338819978409561
    0x88f08f0f627cc, // 2^(633/1024) == 1.5349206364212362
    0x8934ac52be8f8, // 2^(634/1024) == 1.535959978295578
    0x8978d564c63e7, // 2^(635/1024) == 1.5370000239402033
    0x89bd0a4785810, // 2^(636/1024) == 1.538040773831657
    0x8a014afd08a94, // 2^(637/1024) == 1.539082228446806
    0x8a4597875c645, // 2^(638/1024) == 1.5401243882628404
    0x8a89efe88dba2, // 2^(639/1024) == 1.5411672537572731
    0x8ace5422aa0dc, // 2^(640/1024) == 1.542210825407941
    0x8b12c437bf1d4, // 2^(641/1024) == 1.5432551036930038
    0x8b574029db01f, // 2^(642/1024) == 1.5443000890909457
    0x8b9bc7fb0c302, // 2^(643/1024) == 1.5453457820805743
    0x8be05bad61779, // 2^(644/1024) == 1.5463921831410217
    0x8c24fb42ea034, // 2^(645/1024) == 1.5474392927517444
    0x8c69a6bdb5598, // 2^(646/1024) == 1.5484871113925234
    0x8cae5e1fd35c4, // 2^(647/1024) == 1.549535639543465
    0x8cf3216b5448c, // 2^(648/1024) == 1.550584877685
    0x8d37f0a248b80, // 2^(649/1024) == 1.5516348262978852
    0x8d7ccbc6c19e7, // 2^(650/1024) == 1.5526854858632022
    0x8dc1b2dad04c4, // 2^(651/1024) == 1.5537368568623586
    0x8e06a5e0866d9, // 2^(652/1024) == 1.5547889397770887
    0x8e4ba4d9f60a1, // 2^(653/1024) == 1.5558417350894518
    0x8e90afc931858, // 2^(654/1024) == 1.5568952432818346
    0x8ed5c6b04b9f6, // 2^(655/1024) == 1.5579494648369496
    0x8f1ae99157737, // 2^(656/1024) == 1.5590044002378372
    0x8f60186e68794, // 2^(657/1024) == 1.5600600499678636
    0x8fa553499284b, // 2^(658/1024) == 1.5611164145107235
    0x8fea9a24e9c5c, // 2^(659/1024) == 1.5621734943504384
    0x902fed0282c8b, // 2^(660/1024) == 1.5632312899713579
    0x90754be472761, // 2^(661/1024) == 1.5642898018581592
    0x90bab6ccce12c, // 2^(662/1024) == 1.565349030495848
    0x91002dbdab404, // 2^(663/1024) == 1.5664089763697584
    0x9145b0b91ffc6, // 2^(664/1024) == 1.567469639965553
    0x918b3fc142a1a, // 2^(665/1024) == 1.5685310217692234
    0x91d0dad829e70, // 2^(666/1024) == 1.56959312226709
    0x921681ffece05, // 2^(667/1024) == 1.5706559419458028
    0x925c353aa2fe2, // 2^(668/1024) == 1.5717194812923414
    0x92a1f48a640dc, // 2^(669/1024) == 1.5727837407940148
    0x92e7bff148396, // 2^(670/1024) == 1.5738487209384622
    0x932d977168083, // 2^(671/1024) == 1.5749144222136529
    0x93737b0cdc5e5, // 2^(672/1024) == 1.5759808451078865
    0x93b96ac5be7d1, // 2^(673/1024) == 1.5770479901097938
    0x93ff669e2802c, // 2^(674/1024) == 1.5781158577083358
    0x94456e9832eae, // 2^(675/1024) == 1.5791844483928048
    0x948b82b5f98e5, // 2^(676/1024) == 1.5802537626528246
    0x94d1a2f996a34, // 2^(677/1024) == 1.5813238009783506
    0x9517cf65253d1, // 2^(678/1024) == 1.5823945638596693
    0x955e07fac0ccd, // 2^(679/1024) == 1.5834660517874
    0x95a44cbc8520f, // 2^(680/1024) == 1.5845382652524937
    0x95ea9dac8e659, // 2^(681/1024) == 1.5856112047462345
    0x9630faccf9244, // 2^(682/1024) == 1.5866848707602381
    0x9677641fe2446, // 2^(683/1024) == 1.5877592637864537
    0x96bdd9a7670b3, // 2^(684/1024) == 1.588834384317164
    0x97045b65a51ba, // 2^(685/1024) == 1.5899102328449843
    0x974ae95cba769, // 2^(686/1024) == 1.5909868098628641
    0x9791838ec57ab, // 2^(687/1024) == 1.5920641158640858
    0x97d829fde4e50, // 2^(688/1024) == 1.593142151342267
    0x981edcac37d05, // 2^(689/1024) == 1.5942209167913586
    0x98659b9bddb5c, // 2^(690/1024) == 1.5953004127056465
    0x98ac66cef66c8, // 2^(691/1024) == 1.5963806395797508
    0x98f33e47a22a3, // 2^(692/1024) == 1.5974615979086273
    0x993a220801829, // 2^(693/1024) == 1.5985432881875659
    0x9981121235681, // 2^(694/1024) == 1.599625710912193
    0x99c80e685f2b5, // 2^(695/1024) == 1.6007088665784697
    0x9a0f170ca07ba, // 2^(696/1024) == 1.6017927556826934
    0x9a562c011b66e, // 2^(697/1024) == 1.6028773787214976
    0x9a9d4d47f2598, // 2^(698/1024) == 1.6039627361918516
    0x9ae47ae3481ed, // 2^(699/1024) == 1.6050488285910618
    0x9b2bb4d53fe0d, // 2^(700/1024) == 1.606135656416771
    0x9b72fb1ffd286, // 2^(701/1024) == 1.6072232201669592
    0x9bba4dc5a3dd4, // 2^(702/1024) == 1.6083115203399432
    0x9c01acc858463, // 2^(703/1024) == 1.6094005574343775
    0x9c49182a3f091, // 2^(704/1024) == 1.6104903319492545
    0x9c908fed7d2ab, // 2^(705/1024) == 1.611580844383904
    0x9cd81414380f3, // 2^(706/1024) == 1.612672095237994
    0x9d1fa4a09579e, // 2^(707/1024) == 1.6137640850115313
    0x9d674194bb8d5, // 2^(708/1024) == 1.6148568142048607
    0x9daeeaf2d0cb9, // 2^(709/1024) == 1.6159502833186663
    0x9df6a0bcfc15f, // 2^(710/1024) == 1.6170444928539707
    0x9e3e62f564ad5, // 2^(711/1024) == 1.6181394433121359
    0x9e86319e32324, // 2^(712/1024) == 1.619235135194864
    0x9ece0cb98ca4b, // 2^(713/1024) == 1.6203315690041957
    0x9f15f4499c648, // 2^(714/1024) == 1.621428745242513
    0x9f5de8508a312, // 2^(715/1024) == 1.6225266644125367
    0x9fa5e8d07f29e, // 2^(716/1024) == 1.6236253270173289
    0x9fedf5cba4ce1, // 2^(717/1024) == 1.6247247335602923
    0xa0360f4424fcb, // 2^(718/1024) == 1.62582488454517
    0xa07e353c29f51, // 2^(719/1024) == 1.6269257804760466
    0xa0c667b5de565, // 2^(720/1024) == 1.6280274218573478
    0xa10ea6b36d1fe, // 2^(721/1024) == 1.629129809193841
    0xa156f23701b16, // 2^(722/1024) == 1.6302329429906357
    0xa19f4a42c7ca9, // 2^(723/1024) == 1.6313368237531825
    0xa1e7aed8eb8bc, // 2^(724/1024) == 1.6324414519872752
    0xa2301ffb99757, // 2^(725/1024) == 1.6335468281990495
    0xa2789dacfe68c, // 2^(726/1024) == 1.6346529528949842
    0xa2c127ef47a75, // 2^(727/1024) == 1.635759826581901
    0xa309bec4a2d34, // 2^(728/1024) == 1.6368674497669646
    0xa352622f3def7, // 2^(729/1024) == 1.637975822957683
    0xa39b1231475f8, // 2^(730/1024) == 1.6390849466619084
    0xa3e3ceccede7c, // 2^(731/1024) == 1.6401948213878361
    0xa42c980460ad8, // 2^(732/1024) == 1.6413054476440063
    0xa4756dd9cf36e, // 2^(733/1024) == 1.642416825939303
    0xa4be504f696b1, // 2^(734/1024) == 1.6435289567829552
    0xa5073f675f924, // 2^(735/1024) == 1.6446418406845362
    0xa5503b23e255d, // 2^(736/1024) == 1.645755478153965
    0xa599438722c04, // 2^(737/1024) == 1.6468698697015052
    0xa5e25893523d5, // 2^(738/1024) == 1.6479850158377662
    0xa62b7a4aa29a2, // 2^(739/1024) == 1.6491009170737034
    0xa674a8af46053, // 2^(740/1024) == 1.650217573920618
    0xa6bde3c36f0e6, // 2^(741/1024) == 1.651334986890157
    0xa7072b8950a73, // 2^(742/1024) == 1.6524531564943146
    0xa75080031e22b, // 2^(743/1024) == 1.6535720832454313
    0xa799e1330b359, // 2^(744/1024) == 1.6546917676561945
    0xa7e34f1b4bf62, // 2^(745/1024) == 1.6558122102396386
    0xa82cc9be14dcb, // 2^(746/1024) == 1.656933411509146
    0xa876511d9ac33, // 2^(747/1024) == 1.658055371978446
    0xa8bfe53c12e59, // 2^(748/1024) == 1.6591780921616162
    0xa909861bb2e1d, // 2^(749/1024) == 1.660301572573082
    0xa95333beb0b7e, // 2^(750/1024) == 1.6614258137276177
    0xa99cee2742c9e, // 2^(751/1024) == 1.6625508161403455
    0xa9e6b5579fdc0, // 2^(752/1024) == 1.6636765803267366
    0xaa308951ff14d, // 2^(753/1024) == 1.6648031068026115
    0xaa7a6a1897fd3, // 2^(754/1024) == 1.6659303960841398
    0xaac457ada2804, // 2^(755/1024) == 1.6670584486878406
    0xab0e521356ebb, // 2^(756/1024) == 1.6681872651305827
    0xab58594bedefb, // 2^(757/1024) == 1.669316845929585
    0xaba26d59a09ef, // 2^(758/1024) == 1.6704471916024166
    0xabec8e3ea86ee, // 2^(759/1024) == 1.671578302666997
    0xac36bbfd3f37a, // 2^(760/1024) == 1.6727101796415966
    0xac80f6979f341, // 2^(761/1024) == 1.6738428230448366
    0xaccb3e100301e, // 2^(762/1024) == 1.674976233395689
    0xad159268a5a1c, // 2^(763/1024) == 1.676110411213478
    0xad5ff3a3c2775, // 2^(764/1024) == 1.6772453570178787
    0xadaa61c395493, // 2^(765/1024) == 1.6783810713289185
    0xadf4dcca5a414, // 2^(766/1024) == 1.679517554666977
    0xae3f64ba4dec6, // 2^(767/1024) == 1.6806548075527856
    0xae89f995ad3ae, // 2^(768/1024) == 1.6817928305074292
    0xaed49b5eb5803, // 2^(769/1024) == 1.6829316240523446
    0xaf1f4a17a4735, // 2^(770/1024) == 1.6840711887093225
    0xaf6a05c2b82ea, // 2^(771/1024) == 1.6852115250005064
    0xafb4ce622f2ff, // 2^(772/1024) == 1.6863526334483934
    0xafffa3f84858d, // 2^(773/1024) == 1.6874945145758347
    0xb04a868742ee5, // 2^(774/1024) == 1.688637168906035
    0xb09576115e994, // 2^(775/1024) == 1.689780596962554
    0xb0e07298db666, // 2^(776/1024) == 1.6909247992693053
    0xb12b7c1ff9c62, // 2^(777/1024) == 1.6920697763505577
    0xb17692a8fa8ce, // 2^(778/1024) == 1.6932155287309345
    0xb1c1b6361ef31, // 2^(779/1024) == 1.6943620569354148
    0xb20ce6c9a8953, // 2^(780/1024) == 1.6955093614893328
    0xb2582465d973c, // 2^(781/1024) == 1.6966574429183785
    0xb2a36f0cf3f3a, // 2^(782/1024) == 1.697806301748598
    0xb2eec6c13addd, // 2^(783/1024) == 1.6989559385063935
    0xb33a2b84f15fb, // 2^(784/1024) == 1.7001063537185235
    0xb3859d5a5b0b1, // 2^(785/1024) == 1.7012575479121035
    0xb3d11c43bbd62, // 2^(786/1024) == 1.7024095216146056
    0xb41ca843581bb, // 2^(787/1024) == 1.7035622753538593
    0xb468415b749b1, // 2^(788/1024) == 1.7047158096580513
    0xb4b3e78e56786, // 2^(789/1024) == 1.7058701250557262
    0xb4ff9ade433c6, // 2^(790/1024) == 1.7070252220757864
    0xb54b5b4d80d4a, // 2^(791/1024) == 1.7081811012474923
    0xb59728de5593a, // 2^(792/1024) == 1.709337763100463
    0xb5e303930830c, // 2^(793/1024) == 1.7104952081646756
    0xb62eeb6ddfc87, // 2^(794/1024) == 1.7116534369704668
    0xb67ae07123dc3, // 2^(795/1024) == 1.712812450048532
    0xb6c6e29f1c52b, // 2^(796/1024) == 1.7139722479299262
    0xb712f1fa1177b, // 2^(797/1024) == 1.7151328311460634
    0xb75f0e844bfc7, // 2^(798/1024) == 1.7162942002287183
    0xb7ab384014f76, // 2^(799/1024) == 1.7174563557100249
    0xb7f76f2fb5e47, // 2^(800/1024) == 1.718619298122478
    0xb843b35578a52, // 2^(801/1024) == 1.719783027998933
    0xb89004b3a7804, // 2^(802/1024) == 1.7209475458726056
    0xb8dc634c8d229, // 2^(803/1024) == 1.7221128522770732
    0xb928cf22749e4, // 2^(804/1024) == 1.723278947746274
    0xb9754837a96b7, // 2^(805/1024) == 1.724445832814508
    0xb9c1ce8e77681, // 2^(806/1024) == 1.7256135080164372
    0xba0e62292ad7e, // 2^(807/1024) == 1.726781973887085
    0xba5b030a1064a, // 2^(808/1024) == 1.7279512309618377
    0xbaa7b133751e3, // 2^(809/1024) == 1.7291212797764437
    0xbaf46ca7a67a8, // 2^(810/1024) == 1.7302921208670146
    0xbb413568f255a, // 2^(811/1024) == 1.7314637547700245
    0xbb8e0b79a6f1f, // 2^(812/1024) == 1.732636182022311
    0xbbdaeedc12f83, // 2^(813/1024) == 1.7338094031610758
    0xbc27df9285776, // 2^(814/1024) == 1.7349834187238833
    0xbc74dd9f4de50, // 2^(815/1024) == 1.7361582292486624
    0xbcc1e904bc1d3, // 2^(816/1024) == 1.7373338352737064
    0xbd0f01c520628, // 2^(817/1024) == 1.7385102373376728
    0xbd5c27e2cb5e5, // 2^(818/1024) == 1.7396874359795842
    0xbda95b600e20b, // 2^(819/1024) == 1.740865431738828
    0xbdf69c3f3a207, // 2^(820/1024) == 1.7420442251551564
    0xbe43ea82a13b6, // 2^(821/1024) == 1.7432238167686882
    0xbe91462c95b60, // 2^(822/1024) == 1.7444042071199064
    0xbedeaf3f6a3c3, // 2^(823/1024) == 1.7455853967496615
    0xbf2c25bd71e09, // 2^(824/1024) == 1.746767386199169
    0xbf79a9a9001d2, // 2^(825/1024) == 1.7479501760100118
    0xbfc73b0468d30, // 2^(826/1024) == 1.749133766724139
    0xc014d9d2004aa, // 2^(827/1024) == 1.7503181588838665
    0xc06286141b33d, // 2^(828/1024) == 1.7515033530318782
    0xc0b03fcd0ea5d, // 2^(829/1024) == 1.7526893497112248
    0xc0fe06ff301f5, // 2^(830/1024) == 1.7538761494653248
    0xc14bdbacd586a, // 2^(831/1024) == 1.7550637528379647
    0xc199bdd85529d, // 2^(832/1024) == 1.7562521603732997
    0xc1e7ad8405be6, // 2^(833/1024) == 1.7574413726158524
    0xc235aab23e61e, // 2^(834/1024) == 1.7586313901105153
    0xc283b5655699a, // 2^(835/1024) == 1.7598222134025492
    0xc2d1cd9fa652c, // 2^(836/1024) == 1.761013843037584
    0xc31ff36385e29, // 2^(837/1024) == 1.7622062795616193
    0xc36e26b34e066, // 2^(838/1024) == 1.763399523521025
    0xc3bc679157e38, // 2^(839/1024) == 1.7645935754625395
    0xc40ab5fffd07b, // 2^(840/1024) == 1.765788435933273
    0xc45912019768c, // 2^(841/1024) == 1.766984105480705
    0xc4a77b9881650, // 2^(842/1024) == 1.7681805846526863
    0xc4f5f2c715c31, // 2^(843/1024) == 1.7693778739974386
    0xc544778fafb23, // 2^(844/1024) == 1.770575974063555
    0xc59309f4aaca0, // 2^(845/1024) == 1.7717748853999993
    0xc5e1a9f8630ad, // 2^(846/1024) == 1.7729746085561076
    0xc630579d34ddd, // 2^(847/1024) == 1.7741751440815883
    0xc67f12e57d14c, // 2^(848/1024) == 1.7753764925265214
    0xc6cddbd398ea4, // 2^(849/1024) == 1.7765786544413595
    0xc71cb269e601f, // 2^(850/1024) == 1.7777816303769283
    0xc76b96aac2686, // 2^(851/1024) == 1.778985420884426
    0xc7ba88988c933, // 2^(852/1024) == 1.7801900265154245
    0xc8098835a3612, // 2^(853/1024) == 1.7813954478218688
    0xc8589584661a1, // 2^(854/1024) == 1.7826016853560775
    0xc8a7b087346f5, // 2^(855/1024) == 1.783808739670744
    0xc8f6d9406e7b6, // 2^(856/1024) == 1.7850166113189352
    0xc9460fb274c23, // 2^(857/1024) == 1.7862253008540925
    0xc99553dfa8314, // 2^(858/1024) == 1.7874348088300325
    0xc9e4a5ca6a1f9, // 2^(859/1024) == 1.7886451358009465
    0xca3405751c4db, // 2^(860/1024) == 1.789856282321401
    0xca8372e220e61, // 2^(861/1024) == 1.7910682489463385
    0xcad2ee13da7cc, // 2^(862/1024) == 1.7922810362310768
    0xcb22770cac0fa, // 2^(863/1024) == 1.7934946447313096
    0xcb720dcef906a, // 2^(864/1024) == 1.7947090750031074
    0xcbc1b25d25338, // 2^(865/1024) == 1.7959243276029166
    0xcc1164b994d23, // 2^(866/1024) == 1.797140403087561
    0xcc6124e6ac88c, // 2^(867/1024) == 1.7983573020142414
    0xccb0f2e6d1675, // 2^(868/1024) == 1.7995750249405351
    0xcd00cebc68e88, // 2^(869/1024) == 1.8007935724243982
    0xcd50b869d8f10, // 2^(870/1024) == 1.8020129450241633
    0xcda0aff187d02, // 2^(871/1024) == 1.803233143298542
    0xcdf0b555dc3fa, // 2^(872/1024) == 1.804454167806624
    0xce40c8993d63d, // 2^(873/1024) == 1.8056760191078773
    0xce90e9be12cba, // 2^(874/1024) == 1.8068986977621493
    0xcee118c6c470a, // 2^(875/1024) == 1.8081222043296656
    0xcf3155b5bab74, // 2^(876/1024) == 1.809346539371032
    0xcf81a08d5e6ed, // 2^(877/1024) == 1.8105717034472335
    0xcfd1f95018d17, // 2^(878/1024) == 1.811797697119635
    0xd022600053846, // 2^(879/1024) == 1.8130245209499818
    0xd072d4a07897c, // 2^(880/1024) == 1.8142521755003989
    0xd0c35732f2871, // 2^(881/1024) == 1.8154806613333927
    0xd113e7ba2c38d, // 2^(882/1024) == 1.81670997901185
    0xd164863890fee, // 2^(883/1024) == 1.8179401290990387
    0xd1b532b08c969, // 2^(884/1024) == 1.8191711121586087
    0xd205ed248b287, // 2^(885/1024) == 1.8204029287545909
    0xd256b596f948c, // 2^(886/1024) == 1.8216355794513985
    0xd2a78c0a43f73, // 2^(887/1024) == 1.8228690648138268
    0xd2f87080d89f2, // 2^(888/1024) == 1.8241033854070534
    0xd34962fd2517b, // 2^(889/1024) == 1.8253385417966388
    0xd39a638197a3c, // 2^(890/1024) == 1.8265745345485263
    0xd3eb72109ef22, // 2^(891/1024) == 1.8278113642290426
    0xd43c8eacaa1d7, // 2^(892/1024) == 1.8290490314048975
    0xd48db95828ac7, // 2^(893/1024) == 1.830287536643185
    0xd4def2158a91f, // 2^(894/1024) == 1.831526880511383
    0xd53038e7402ce, // 2^(895/1024) == 1.8327670635773532
    0xd5818dcfba488, // 2^(896/1024) == 1.8340080864093427
    0xd5d2f0d16a1c3, // 2^(897/1024) == 1.8352499495759822
    0xd62461eec14bf, // 2^(898/1024) == 1.8364926536462887
    0xd675e12a31e80, // 2^(899/1024) == 1.8377361991896635
    0xd6c76e862e6d4, // 2^(900/1024) == 1.838980586775894
    0xd7190a0529c51, // 2^(901/1024) == 1.8402258169751529
    0xd76ab3a99745b, // 2^(902/1024) == 1.8414718903579999
    0xd7bc6b75eab1f, // 2^(903/1024) == 1.8427188074953802
    0xd80e316c98398, // 2^(904/1024) == 1.843966568958626
    0xd86005901478f, // 2^(905/1024) == 1.8452151753194561
    0xd8b1e7e2d479d, // 2^(906/1024) == 1.8464646271499767
    0xd903d8674db2c, // 2^(907/1024) == 1.8477149250226814
    0xd955d71ff6076, // 2^(908/1024) == 1.848966069510451
    0xd9a7e40f43c8a, // 2^(909/1024) == 1.8502180611865549
    0xd9f9ff37adb4a, // 2^(910/1024) == 1.85147090062465
    0xda4c289baaf6f, // 2^(911/1024) == 1.8527245883987822
    0xda9e603db3286, // 2^(912/1024) == 1.8539791250833857
    0xdaf0a6203e4f6, // 2^(913/1024) == 1.855234511253284
    0xdb42fa45c4dfe, // 2^(914/1024) == 1.8564907474836896
    0xdb955cb0bfbb7, // 2^(915/1024) == 1.8577478343502045
    0xdbe7cd63a8315, // 2^(916/1024) == 1.8590057724288205
    0xdc3a4c60f7fea, // 2^(917/1024) == 1.8602645622959195
    0xdc8cd9ab294e5, // 2^(918/1024) == 1.8615242045282738
    0xdcdf7544b6b92, // 2^(919/1024) == 1.8627846997030457
    0xdd321f301b461, // 2^(920/1024) == 1.8640460483977892
    0xdd84d76fd269f, // 2^(921/1024) == 1.8653082511904484
    0xddd79e065807e, // 2^(922/1024) == 1.8665713086593594
    0xde2a72f628713, // 2^(923/1024) == 1.8678352213832496
    0xde7d5641c0658, // 2^(924/1024) == 1.8690999899412386
    0xded047eb9d12d, // 2^(925/1024) == 1.8703656149128378
    0xdf2347f63c159, // 2^(926/1024) == 1.8716320968779512
    0xdf7656641b78c, // 2^(927/1024) == 1.8728994364168754
    0xdfc97337b9b5f, // 2^(928/1024) == 1.8741676341103
    0xe01c9e7395b56, // 2^(929/1024) == 1.8754366905393076
    0xe06fd81a2ece1, // 2^(930/1024) == 1.8767066062853746
    0xe0c3202e04c5e, // 2^(931/1024) == 1.877977381930371
    0xe11676b197d17, // 2^(932/1024) == 1.8792490180565602
    0xe169dba76894a, // 2^(933/1024) == 1.8805215152466013
    0xe1bd4f11f8221, // 2^(934/1024) == 1.8817948740835464
    0xe210d0f3c7fbb, // 2^(935/1024) == 1.8830690951508433
    0xe264614f5a129, // 2^(936/1024) == 1.8843441790323345
    0xe2b8002730c72, // 2^(937/1024) == 1.8856201263122583
    0xe30bad7dcee91, // 2^(938/1024) == 1.886896937575248
    0xe35f6955b7b78, // 2^(939/1024) == 1.888174613406333
    0xe3b333b16ee12, // 2^(940/1024) == 1.8894531543909392
    0xe4070c9378843, // 2^(941/1024) == 1.8907325611148884
    0xe45af3fe592e8, // 2^(942/1024) == 1.8920128341643991
    0xe4aee9f495ddd, // 2^(943/1024) == 1.8932939741260875
    0xe502ee78b3ff7, // 2^(944/1024) == 1.8945759815869658
    0xe557018d3970b, // 2^(945/1024) == 1.8958588571344446
    0xe5ab2334ac7ee, // 2^(946/1024) == 1.897142601356332
    0xe5ff537193e75, // 2^(947/1024) == 1.898427214840834
    0xe653924676d76, // 2^(948/1024) == 1.8997126981765553
    0xe6a7dfb5dcecb, // 2^(949/1024) == 1.9009990519524986
    0xe6fc3bc24e351, // 2^(950/1024) == 1.9022862767580657
    0xe750a66e532eb, // 2^(951/1024) == 1.9035743731830574
    0xe7a51fbc74c84, // 2^(952/1024) == 1.9048633418176744
    0xe7f9a7af3c60c, // 2^(953/1024) == 1.906153183252516
    0xe84e3e4933c7e, // 2^(954/1024) == 1.9074438980785824
    0xe8a2e38ce53e0, // 2^(955/1024) == 1.9087354868872737
    0xe8f7977cdb740, // 2^(956/1024) == 1.9100279502703899
    0xe94c5a1ba18bd, // 2^(957/1024) == 1.9113212888201325
    0xe9a12b6bc3182, // 2^(958/1024) == 1.9126155031291039
    0xe9f60b6fcc1c8, // 2^(959/1024) == 1.9139105937903071
    0xea4afa2a490da, // 2^(960/1024) == 1.9152065613971474
    0xea9ff79dc6d14, // 2^(961/1024) == 1.9165034065434314
    0xeaf503ccd2be6, // 2^(962/1024) == 1.9178011298233684
    0xeb4a1eb9fa9d1, // 2^(963/1024) == 1.919099731831569
    0xeb9f4867cca6f, // 2^(964/1024) == 1.9203992131630476
    0xebf480d8d786e, // 2^(965/1024) == 1.9216995744132208
    0xec49c80faa594, // 2^(966/1024) == 1.9230008161779084
    0xec9f1e0ed4ac2, // 2^(967/1024) == 1.9243029390533342
    0xecf482d8e67f1, // 2^(968/1024) == 1.925605943636125
    0xed49f67070436, // 2^(969/1024) == 1.926909830523312
    0xed9f78d802dc2, // 2^(970/1024) == 1.9282146003123306
    0xedf50a122f9e6, // 2^(971/1024) == 1.9295202536010208
    0xee4aaa2188511, // 2^(972/1024) == 1.9308267909876273
    0xeea059089f2d1, // 2^(973/1024) == 1.9321342130708
    0xeef616ca06dd7, // 2^(974/1024) == 1.9334425204495937
    0xef4be368527f7, // 2^(975/1024) == 1.9347517137234698
    0xefa1bee615a28, // 2^(976/1024) == 1.9360617934922946
    0xeff7a945e4488, // 2^(977/1024) == 1.9373727603563413
    0xf04da28a52e5a, // 2^(978/1024) == 1.9386846149162893
    0xf0a3aab5f6609, // 2^(979/1024) == 1.9399973577732246
    0xf0f9c1cb6412a, // 2^(980/1024) == 1.9413109895286405
    0xf14fe7cd31c7c, // 2^(981/1024) == 1.9426255107844375
    0xf1a61cbdf5be7, // 2^(982/1024) == 1.9439409221429231
    0xf1fc60a046a84, // 2^(983/1024) == 1.9452572242068138
    0xf252b376bba98, // 2^(984/1024) == 1.9465744175792334
    0xf2a91543ec595, // 2^(985/1024) == 1.947892502863714
    0xf2ff860a70c22, // 2^(986/1024) == 1.949211480664197
    0xf35605cce1614, // 2^(987/1024) == 1.950531351585032
    0xf3ac948dd7274, // 2^(988/1024) == 1.9518521162309783
    0xf403324feb781, // 2^(989/1024) == 1.953173775207205
    0xf459df15b82ad, // 2^(990/1024) == 1.95449632911929
    0xf4b09ae1d78a2, // 2^(991/1024) == 1.9558197785732223
    0xf50765b6e4541, // 2^(992/1024) == 1.9571441241754004
    0xf55e3f9779ba6, // 2^(993/1024) == 1.958469366532634
    0xf5b5288633626, // 2^(994/1024) == 1.9597955062521435
    0xf60c2085ad652, // 2^(995/1024) == 1.9611225439415603
    0xf6632798844f9, // 2^(996/1024) == 1.9624504802089275
    0xf6ba3dc155227, // 2^(997/1024) == 1.9637793156627
    0xf7116302bd527, // 2^(998/1024) == 1.965109050911744
    0xf768975f5ac86, // 2^(999/1024) == 1.9664396865653386
    0xf7bfdad9cbe14, // 2^(1000/1024) == 1.9677712232331759
    0xf8172d74af6e2, // 2^(1001/1024) == 1.9691036615253599
    0xf86e8f32a4b46, // 2^(1002/1024) == 1.970437002052408
    0xf8c600164b6dd, // 2^(1003/1024) == 1.9717712454252514
    0xf91d802243c89, // 2^(1004/1024) == 1.9731063922552343
    0xf9750f592e678, // 2^(1005/1024) == 1.9744424431541159
    0xf9ccadbdac61d, // 2^(1006/1024) == 1.9757793987340684
    0xfa245b525f439, // 2^(1007/1024) == 1.9771172596076794
    0xfa7c1819e90d9, // 2^(1008/1024) == 1.9784560263879511
    0xfad3e416ec354, // 2^(1009/1024) == 1.9797956996883004
    0xfb2bbf4c0ba55, // 2^(1010/1024) == 1.9811362801225603
    0xfb83a9bbeabd2, // 2^(1011/1024) == 1.9824777683049786
    0xfbdba3692d514, // 2^(1012/1024) == 1.9838201648502194
    0xfc33ac5677ab9, // 2^(1013/1024) == 1.9851634703733636
    0xfc8bc4866e8ae, // 2^(1014/1024) == 1.9865076854899075
    0xfce3ebfbb7238, // 2^(1015/1024) == 1.987852810815765
    0xfd3c22b8f71f2, // 2^(1016/1024) == 1.9891988469672666
    0xfd9468c0d49cd, // 2^(1017/1024) == 1.9905457945611602
    0xfdecbe15f6315, // 2^(1018/1024) == 1.9918936542146117
    0xfe4522bb02e6e, // 2^(1019/1024) == 1.9932424265452044
    0xfe9d96b2a23da, // 2^(1020/1024) == 1.9945921121709405
    0xfef619ff7c2b3, // 2^(1021/1024) == 1.9959427117102393
    0xff4eaca4391b6, // 2^(1022/1024) == 1.9972942257819404
    0xffa74ea381efd, // 2^(1023/1024) == 1.9986466550053017
];
