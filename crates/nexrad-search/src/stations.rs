//! Registry of NEXRAD WSR-88D radar sites.
//!
//! The table is compiled into the binary and never mutated. Elevations are
//! meters above sea level at the antenna site.

use serde::Serialize;

/// A fixed radar installation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Station {
    /// Four-letter ICAO identifier, e.g. `KIND`.
    pub id: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    /// Site elevation in meters. `None` is treated as sea level.
    pub elevation: Option<f64>,
}

impl Station {
    /// Elevation in meters, sea level when unknown.
    pub fn elevation_or_sea_level(&self) -> f64 {
        self.elevation.unwrap_or(0.0)
    }
}

const fn station(id: &'static str, latitude: f64, longitude: f64, elevation: f64) -> Station {
    Station {
        id,
        latitude,
        longitude,
        elevation: Some(elevation),
    }
}

/// Every station in the archive, in registry order.
pub static STATIONS: &[Station] = &[
    station("PAPD", 65.0351238, -147.5014222, 788.463378906),
    station("PAEC", 64.5114973, -165.2949071, 24.3814811707),
    station("PABC", 60.791987, -161.876539, 45.4714241028),
    station("PAHG", 60.6156335, -151.2832296, 33.0453109741),
    station("PAIH", 59.46194, -146.30111, 9.58207035065),
    station("PAKC", 58.6794558, -156.6293335, 24.7693424225),
    station("PACG", 56.85214, -135.552417, 72.8054656982),
    station("KMBX", 48.39303, -100.8644378, 453.602722168),
    station("KGGW", 48.2064536, -106.6252971, 692.583557129),
    station("KATX", 48.1945614, -122.4957508, 151.496307373),
    station("KOTX", 47.6803744, -117.6267797, 726.6328125),
    station("KMVX", 47.5279417, -97.3256654, 300.624237061),
    station("KTFX", 47.4595023, -111.3855368, 1131.57897949),
    station("KLGX", 47.116806, -124.10625, 72.0566177368),
    station("KMSX", 47.0412971, -113.9864373, 2416.84350586),
    station("KDLH", 46.8368569, -92.2097433, 435.757995605),
    station("KBIS", 46.7709329, -100.7605532, 505.457763672),
    station("KMQT", 46.5311443, -87.5487131, 429.599578857),
    station("KCBW", 46.0391944, -67.8066033, 229.192352295),
    station("KBLX", 45.8537632, -108.6068165, 1097.45544434),
    station("KRTX", 45.7150308, -122.9650542, 480.622253418),
    station("KPDT", 45.6906118, -118.8529301, 460.415618896),
    station("KABR", 45.4558185, -98.4132046, 397.455749512),
    station("KAPX", 44.907106, -84.719817, 444.954559326),
    station("KMPX", 44.8488029, -93.5654873, 290.205993652),
    station("KCXX", 44.5109941, -73.166424, 96.5139389038),
    station("KGRB", 44.4984644, -88.111124, 208.527801514),
    station("KUDX", 44.1248485, -102.8298157, 920.275146484),
    station("KGYX", 43.8913555, -70.2565545, 123.742012024),
    station("KARX", 43.822766, -91.1915767, 385.875732422),
    station("KTYX", 43.7556319, -75.6799918, 565.0),
    station("KFSD", 43.5877467, -96.7293674, 435.657104492),
    station("KCBX", 43.4902104, -116.2360436, 931.590515137),
    station("KSFX", 43.1055967, -112.6860487, 1363.46582031),
    station("KRIW", 43.0660779, -108.4773731, 1696.25708008),
    station("KMKX", 42.9678286, -88.5506335, 292.873931885),
    station("KBUF", 42.9488055, -78.7369108, 210.751663208),
    station("KGRR", 42.893872, -85.5449206, 235.494491577),
    station("KDTX", 42.6999677, -83.471809, 325.859527588),
    station("KENX", 42.5865699, -74.0639877, 558.070068359),
    station("KBGM", 42.1997045, -75.9847015, 486.897369385),
    station("KMAX", 42.0810766, -122.7173334, 2283.64038086),
    station("KLNX", 41.9579623, -100.5759609, 901.889648438),
    station("KBOX", 41.9558919, -71.1369681, 34.3613433838),
    station("KDMX", 41.7311788, -93.7229235, 299.356231689),
    station("KDVN", 41.611556, -90.5809987, 229.582611084),
    station("KLOT", 41.6044264, -88.084361, 201.561080933),
    station("KCLE", 41.4131875, -81.8597451, 232.110565186),
    station("KIWX", 41.3586356, -85.7000488, 291.789398193),
    station("KOAX", 41.3202803, -96.3667971, 347.570922852),
    station("KMTX", 41.2627795, -112.4480081, 1968.43981934),
    station("KCYS", 41.1519308, -104.8060325, 1867.6307373),
    station("KCCX", 40.9228521, -78.0038738, 733.065734863),
    station("KOKX", 40.8655093, -72.8638548, 31.604637146),
    station("KLRX", 40.7396933, -116.8025529, 2055.91210938),
    station("KPBZ", 40.5316842, -80.2179515, 360.94921875),
    station("KBHX", 40.4986955, -124.2918867, 730.621398926),
    station("KUEX", 40.320966, -98.4418559, 601.917175293),
    station("KILX", 40.150544, -89.336842, 177.434738159),
    station("KDIX", 39.9470885, -74.4108027, 44.7942123413),
    station("KFTG", 39.7866156, -104.5458126, 1675.9786377),
    station("KRGX", 39.7541931, -119.4620597, 2529.13623047),
    station("KIND", 39.7074962, -86.2803675, 239.935531616),
    station("KILN", 39.5083314, -83.8176925, 314.308288574),
    station("KBBX", 39.4956958, -121.6316557, 52.6806488037),
    station("KGLD", 39.3667737, -101.7004341, 1113.39050293),
    station("KGJX", 39.0619824, -108.2137012, 3046.57763672),
    station("KTWX", 38.996998, -96.232618, 418.096984863),
    station("KLWX", 38.9753957, -77.4778444, 82.3895339966),
    station("KDOX", 38.8257651, -75.4400763, 14.4144229889),
    station("KEAX", 38.8102231, -94.2644924, 304.820037842),
    station("LPLA", 38.73028, -27.32167, 995.914611816),
    station("KLSX", 38.6986863, -90.682877, 186.451065063),
    station("KDAX", 38.5011529, -121.6778487, 9.16355609894),
    station("KPUX", 38.4595034, -104.1816223, 1599.49328613),
    station("KRLX", 38.3110763, -81.7229015, 328.85546875),
    station("KVWX", 38.2603901, -87.7246553, 155.295959473),
    station("KLVX", 37.9753058, -85.9438455, 220.269515991),
    station("KDDC", 37.7608043, -99.9688053, 790.674621582),
    station("KICT", 37.6545724, -97.4431461, 407.627838135),
    station("KICX", 37.5931771, -112.8637719, 3259.25219727),
    station("KJKL", 37.590762, -83.313039, 415.126831055),
    station("KSGF", 37.235223, -93.4006011, 388.133117676),
    station("RKSG", 37.207652, 127.285614, 430.03793335),
    station("KMUX", 37.155152, -121.8984577, 1057.89123535),
    station("KPAH", 37.0683618, -88.7720257, 120.565567017),
    station("KFCX", 37.0242098, -80.2736664, 879.090270996),
    station("KAKQ", 36.9840475, -77.007342, 34.4969215393),
    station("KVNX", 36.7406166, -98.1279409, 368.980804443),
    station("KHPX", 36.7368894, -87.2854328, 174.537643433),
    station("KHNX", 36.3142088, -119.6320903, 72.0174713135),
    station("KOHX", 36.2472389, -86.5625185, 176.830490112),
    station("KINX", 36.1750977, -95.5642802, 202.862304688),
    station("KMRX", 36.168538, -83.401779, 407.261138916),
    station("RKJK", 35.92417, 126.62222, 24.3717212677),
    station("KESX", 35.7012894, -114.8918277, 1481.92224121),
    station("KRAX", 35.6654967, -78.4897855, 105.193130493),
    station("KNQA", 35.3447802, -89.8734534, 87.3559570312),
    station("KTLX", 35.3333873, -97.2778255, 370.923034668),
    station("KSRX", 35.2904423, -94.3619075, 192.766220093),
    station("KAMA", 35.2334827, -101.7092478, 1094.82958984),
    station("KABX", 35.1497579, -106.8239576, 1789.65551758),
    station("KEYX", 35.0979358, -117.5608832, 840.429992676),
    station("KHTX", 34.930508, -86.0837388, 538.872131348),
    station("KGSP", 34.8833435, -82.2200757, 287.539581299),
    station("KVBX", 34.8383137, -120.3977805, 373.35067749),
    station("KLZK", 34.8365261, -92.2621697, 173.993942261),
    station("KMHX", 34.7759313, -76.8762571, 8.73695468903),
    station("KFDX", 34.6341569, -103.6186427, 1418.25488281),
    station("KFSX", 34.574449, -111.198367, 2261.4152832),
    station("KVTX", 34.4116386, -119.1795641, 830.90411377),
    station("KFDR", 34.3620014, -98.9766884, 383.358886719),
    station("KLTX", 33.9891631, -78.4291059, 18.303440094),
    station("KCAE", 33.9487579, -81.1184281, 70.5524291992),
    station("KGWX", 33.8967796, -88.3293915, 144.803924561),
    station("KSOX", 33.8176452, -117.6359743, 923.408813477),
    station("KLBB", 33.6541242, -101.814149, 993.510437012),
    station("KFFC", 33.3635771, -84.565866, 261.607788086),
    station("KIWA", 33.289111, -111.6700092, 410.986938477),
    station("KBMX", 33.1722806, -86.7698425, 196.879852295),
    station("KHDX", 33.0768844, -106.1200923, 1285.55737305),
    station("KNKX", 32.9189891, -117.041814, 291.50668335),
    station("KJGX", 32.6755239, -83.3508575, 156.225311279),
    station("KCLX", 32.6554866, -81.0423124, 31.1657505035),
    station("KFWS", 32.5730186, -97.3031911, 210.197479248),
    station("KDYX", 32.5386009, -99.2542863, 460.04083252),
    station("KMXX", 32.5366608, -85.7897848, 123.997749329),
    station("KYUX", 32.4953477, -114.6567214, 53.358833313),
    station("KSHV", 32.450813, -93.8412774, 82.6875839233),
    station("KDGX", 32.2797358, -89.9846309, 153.181747437),
    station("KMAF", 31.9433953, -102.1894383, 873.089416504),
    station("KEMX", 31.8937186, -110.6304306, 1589.84436035),
    station("KEPZ", 31.8731115, -106.697942, 1252.69677734),
    station("KEOX", 31.4605622, -85.4592401, 131.946609497),
    station("KSJT", 31.3712815, -100.4925227, 577.01550293),
    station("KPOE", 31.1556923, -92.9762596, 123.123786926),
    station("KVAX", 30.8903853, -83.0019021, 54.7624778748),
    station("KGRK", 30.7217637, -97.3829627, 165.986541748),
    station("KMOB", 30.6795378, -88.2397816, 63.1785812378),
    station("KEVX", 30.5649908, -85.921559, 42.5061149597),
    station("KJAX", 30.4846878, -81.7018917, 8.6268119812),
    station("KTLH", 30.397568, -84.3289116, 18.8315582275),
    station("KLIX", 30.3367133, -89.8256618, 6.59722566605),
    station("KLCH", 30.125382, -93.2161188, 3.53188371658),
    station("KEWX", 29.7039802, -98.028506, 195.63734436),
    station("KHGX", 29.4718835, -95.0788593, 4.79184913635),
    station("KDFX", 29.2730823, -100.2802312, 343.964935303),
    station("KMLB", 28.1131808, -80.6540988, 10.2366123199),
    station("KCRP", 27.7840203, -97.511234, 13.181974411),
    station("KTBW", 27.7054701, -82.40179, 11.8444347382),
    station("RODN", 26.30194, 127.90972, 5.96002388),
    station("KBRO", 25.9159979, -97.4189526, 6.66874933243),
    station("KAMX", 25.6111275, -80.412747, 3.33103895187),
    station("KBYX", 24.5974996, -81.7032355, 1.70358395576),
    station("PHKI", 21.8938762, -159.5524585, 59.5274085999),
    station("PHMO", 21.1327531, -157.1802807, 412.600006104),
    station("PHKM", 20.1254606, -155.778054, 1152.22705078),
    station("PHWA", 19.0950155, -155.5688846, 418.051971436),
    station("TJUA", 18.1155998, -66.0780644, 844.801513672),
    station("PGUA", 13.455965, 144.8111022, 79.0276412964),
];

/// Look up a station by id (case-sensitive).
pub fn find_station(id: &str) -> Option<&'static Station> {
    STATIONS.iter().find(|s| s.id == id)
}

pub fn is_known_station(id: &str) -> bool {
    find_station(id).is_some()
}

/// All station ids in registry order.
pub fn station_ids() -> impl Iterator<Item = &'static str> {
    STATIONS.iter().map(|s| s.id)
}
