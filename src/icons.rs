//! Translation of Google My Maps icon codes into OSMAnd favorite icons.
//!
//! Each entry pairs a KML icon code (the number inside a placemark's
//! `<styleUrl>`, e.g. `#icon-1739-0288D1`) with an OSMAnd icon name, a
//! default color and a background shape. A color of [`IconColor::Kml`]
//! tells the style decoder to use the color carried by the KML style
//! string instead of a fixed one.
//!
//! The translations largely follow the proposal in
//! <https://github.com/mariush444/gmapIcons2osmand/blob/main/icons-gmap-osmand.pdf>.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use self::IconColor::{Fixed, Kml};
use self::Shape::{Circle, Octagon};

/// Fallback color when neither the table nor the KML style supplies one.
pub const DEFAULT_ICON_COLOR: &str = "DB4436";

/// OSMAnd icon/color/shape triple for one KML icon code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconEntry {
    pub icon: &'static str,
    pub color: IconColor,
    pub background: Shape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconColor {
    /// Use the color found in the KML style string.
    Kml,
    Fixed(&'static str),
}

/// OSMAnd supports exactly three background shapes for favorites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Circle,
    Octagon,
    Square,
}

impl Shape {
    pub fn as_str(self) -> &'static str {
        match self {
            Shape::Circle => "circle",
            Shape::Octagon => "octagon",
            Shape::Square => "square",
        }
    }
}

/// Look up the OSMAnd translation for a KML icon code. Codes missing from
/// the table resolve to the "unknown" entry, so every input yields a triple.
pub fn resolve(kml_icon_id: &str) -> IconEntry {
    *ICON_INDEX
        .get(kml_icon_id)
        .unwrap_or_else(|| &ICON_INDEX["unknown"])
}

static ICON_INDEX: Lazy<HashMap<&'static str, IconEntry>> = Lazy::new(|| {
    ICON_TABLE
        .iter()
        .map(|&(id, icon, color, background)| (id, IconEntry { icon, color, background }))
        .collect()
});

// KML icon code, OSMAnd icon name, color, background shape.
// Codes 503-1395 are the original bold GMap icons, 1498 onwards the
// current icon set. "1745"/"1746" carry the alias defect of the upstream
// table verbatim.
static ICON_TABLE: &[(&str, &str, IconColor, Shape)] = &[
    ("unknown", "special_symbol_question_mark", Fixed("e044bb"), Octagon),
    ("503", "special_marker", Kml, Circle),
    ("979", "special_sail_boat", Fixed("a71de1"), Circle),
    ("993", "special_photo_camera", Kml, Circle),
    ("1023", "shop_supermarket", Kml, Circle),
    ("1085", "restaurants", Kml, Circle),
    ("1095", "shop_department_store", Fixed("10c0f0"), Circle),
    ("1203", "tourism_information", Fixed("1010a0"), Circle),
    ("1289", "Museum", Fixed("10c0f0"), Circle),
    ("1369", "special_trekking", Kml, Circle),
    ("1371", "special_trekking", Kml, Circle),
    ("1395", "sport_swimming", Fixed("eecc22"), Circle),
    ("1498", "product_brick", Kml, Circle),
    ("1499", "skimap_white_black_round_shield", Kml, Circle),
    ("1500", "glaziery", Kml, Circle),
    ("1501", "natural_peak", Kml, Circle),
    ("1502", "special_star", Kml, Circle),
    ("1503", "erotic", Kml, Circle),
    ("1504", "air_transport", Kml, Circle),
    ("1505", "emergency", Kml, Circle),
    ("1506", "shop_pet", Kml, Circle),
    ("1507", "shop_pet", Kml, Circle),
    ("1508", "animal_shelter", Kml, Circle),
    ("1509", "amenity_arts_centre", Kml, Circle),
    ("1510", "amenity_atm", Kml, Circle),
    ("1511", "attraction_carousel", Kml, Circle),
    ("1512", "amenity_bank", Kml, Circle),
    ("1513", "amenity_bank", Kml, Circle),
    ("1514", "amenity_bank", Kml, Circle),
    ("1515", "amenity_bank", Kml, Circle),
    ("1516", "shop_hairdresser", Kml, Circle),
    ("1517", "amenity_bar", Kml, Circle),
    ("1518", "amenity_pub", Kml, Circle),
    ("1519", "sport_baseball", Kml, Circle),
    ("1520", "sport_basketball", Kml, Circle),
    ("1521", "leisure_beach_resort", Kml, Circle),
    ("1522", "special_bicycle", Kml, Circle),
    ("1523", "supervised_yes", Kml, Circle),
    ("1524", "hazard", Kml, Circle),
    ("1525", "leisure_slipway", Kml, Circle),
    ("1526", "shop_books", Kml, Circle),
    ("1527", "sport_9pin", Kml, Circle),
    ("1528", "bridge_structure_arch", Kml, Circle),
    ("1529", "communication_tower", Kml, Circle),
    ("1530", "restaurants", Kml, Circle),
    ("1531", "bag", Kml, Circle),
    ("1532", "highway_bus_stop", Kml, Circle),
    ("1533", "funicular", Kml, Circle),
    ("1534", "amenity_cafe", Kml, Circle),
    ("1535", "camera", Kml, Circle),
    ("1536", "sport_canoe", Kml, Circle),
    ("1537", "cargo_vehicle", Kml, Circle),
    ("1538", "shop_car", Kml, Circle),
    ("1539", "shop_car_repair", Kml, Circle),
    ("1540", "amenity_casino", Kml, Circle),
    ("1541", "hazard", Kml, Circle),
    ("1542", "cemetery", Kml, Circle),
    ("1543", "drinking_water_yes", Kml, Circle),
    ("1544", "chemist", Kml, Circle),
    ("1545", "dovecote", Kml, Circle),
    ("1546", "place_city", Kml, Circle),
    ("1547", "suburb", Kml, Circle),
    ("1548", "building", Kml, Circle),
    ("1549", "shop_clothes", Kml, Circle),
    ("1550", "cuisine", Kml, Circle),
    ("1551", "service", Kml, Circle),
    ("1552", "amenity_courthouse", Kml, Circle),
    ("1553", "shop_pet", Kml, Circle),
    ("1554", "sport_cricket", Kml, Circle),
    ("1555", "payment_centre", Kml, Circle),
    ("1556", "hazard", Kml, Circle),
    ("1557", "amenity_dentist", Kml, Circle),
    ("1558", "amenity_doctors", Kml, Circle),
    ("1559", "tourism_hostel", Kml, Circle),
    ("1560", "hazard", Kml, Circle),
    ("1561", "electrical", Kml, Circle),
    ("1562", "shop_car", Kml, Circle),
    ("1563", "military_range", Kml, Circle),
    ("1564", "crater", Kml, Circle),
    ("1565", "industrial", Kml, Circle),
    ("1566", "place_farm", Kml, Circle),
    ("1567", "amenity_fast_food", Kml, Circle),
    ("1568", "attraction_big_wheel", Kml, Circle),
    ("1569", "amenity_ferry_terminal", Kml, Circle),
    ("1570", "finance", Kml, Circle),
    ("1571", "amenity_fire_station", Kml, Circle),
    ("1572", "shop_seafood", Kml, Circle),
    ("1573", "shop_seafood", Kml, Circle),
    ("1574", "special_flag_start", Kml, Circle),
    ("1575", "hazard_flood", Kml, Circle),
    ("1576", "amenity_pharmacy", Kml, Circle),
    ("1577", "restaurants", Kml, Circle),
    ("1578", "food_shop", Kml, Circle),
    ("1579", "american_football", Kml, Circle),
    ("1580", "amenity_fountain", Kml, Circle),
    ("1581", "amenity_fuel", Kml, Circle),
    ("1582", "garden", Kml, Circle),
    ("1583", "barrier_lift_gate", Kml, Circle),
    ("1584", "shop_gift", Kml, Circle),
    ("1585", "sport_golf", Kml, Circle),
    ("1586", "aerialway_gondola", Kml, Circle),
    ("1587", "agrarian", Kml, Circle),
    ("1588", "weapons", Kml, Circle),
    ("1589", "fitness_centre", Kml, Circle),
    ("1590", "service", Kml, Circle),
    ("1591", "ranger_station", Kml, Circle),
    ("1592", "special_heart", Kml, Circle),
    ("1593", "special_helicopter", Kml, Circle),
    ("1594", "special_symbol_question_mark", Kml, Circle),
    ("1595", "special_trekking", Kml, Circle),
    ("1596", "special_trekking", Kml, Circle),
    ("1597", "special_trekking", Kml, Circle),
    ("1598", "historic_castle", Kml, Circle),
    ("1599", "monument", Kml, Circle),
    ("1600", "memorial_plaque", Kml, Circle),
    ("1601", "special_horse", Kml, Circle),
    ("1602", "tourism_hotel", Kml, Circle),
    ("1603", "special_house", Kml, Circle),
    ("1604", "construction", Kml, Circle),
    ("1605", "hazard", Kml, Circle),
    ("1606", "hazard", Kml, Circle),
    ("1607", "ice_cream", Kml, Circle),
    ("1608", "special_information", Kml, Circle),
    ("1609", "special_symbol_at_sign", Kml, Circle),
    ("1610", "cemetery", Kml, Circle),
    ("1611", "special_marker", Kml, Circle),
    ("1612", "amenity_post_box", Kml, Circle),
    ("1613", "shop_jewelry", Kml, Circle),
    ("1614", "special_microphone", Kml, Circle),
    ("1615", "special_kayak", Kml, Circle),
    ("1616", "hazard_erosion", Kml, Circle),
    ("1617", "shop_laundry", Kml, Circle),
    ("1618", "man_made_lighthouse", Kml, Circle),
    ("1619", "power", Kml, Circle),
    ("1620", "shop_pet", Kml, Circle),
    ("1621", "observation_tower", Kml, Circle),
    ("1622", "special_sail_boat", Kml, Circle),
    ("1623", "leisure_marina", Kml, Circle),
    ("1624", "amenity_doctors", Kml, Circle),
    ("1625", "siren", Kml, Circle),
    ("1626", "subway_caracas", Kml, Circle),
    ("1627", "man_made_mineshaft", Kml, Circle),
    ("1628", "special_symbol_question_mark", Kml, Circle),
    ("1629", "route_monorail_ref", Kml, Circle),
    ("1630", "shop_pet", Kml, Circle),
    ("1631", "backrest_yes", Kml, Circle),
    ("1632", "special_motor_scooter", Kml, Circle),
    ("1633", "shop_motorcycle", Kml, Circle),
    ("1634", "natural", Kml, Circle),
    ("1635", "amenity_cinema", Kml, Circle),
    ("1636", "tourism_museum", Kml, Circle),
    ("1637", "special_audio", Kml, Circle),
    ("1638", "newspaper", Kml, Circle),
    ("1639", "ngo", Kml, Circle),
    ("1640", "restaurants", Kml, Circle),
    ("1641", "generator_source_nuclear", Kml, Circle),
    ("1642", "hazard_nuclear", Kml, Circle),
    ("1643", "shop_optician", Kml, Circle),
    ("1644", "parking", Kml, Circle),
    ("1645", "cuisine", Kml, Circle),
    ("1646", "amenity_pharmacy", Kml, Circle),
    ("1647", "shop_mobile_phone", Kml, Circle),
    ("1649", "barrier_cycle_barrier", Kml, Circle),
    ("1650", "tourism_picnic_site", Kml, Circle),
    ("1651", "restaurants", Kml, Circle),
    ("1652", "leisure_playground", Kml, Circle),
    ("1653", "hazard", Kml, Circle),
    ("1654", "geocache", Kml, Circle),
    ("1655", "amenity_police", Kml, Circle),
    ("1656", "amenity_police", Kml, Circle),
    ("1657", "amenity_police", Kml, Circle),
    ("1658", "hazard", Kml, Circle),
    ("1659", "amenity_post_box", Kml, Circle),
    ("1660", "power", Kml, Circle),
    ("1661", "special_flag_finish", Kml, Circle),
    ("1662", "railway_station", Kml, Circle),
    ("1663", "drinking_water_yes", Kml, Circle),
    ("1664", "amenity_library", Kml, Circle),
    ("1665", "beach", Kml, Circle),
    ("1666", "place_of_worship", Kml, Circle),
    ("1667", "religion_buddhist", Kml, Circle),
    ("1668", "religion_buddhist", Kml, Circle),
    ("1669", "place_of_worship", Kml, Circle),
    ("1670", "religion_christian", Kml, Circle),
    ("1671", "building_type_chapel", Kml, Circle),
    ("1672", "religion_hindu", Kml, Circle),
    ("1673", "religion_muslim", Kml, Circle),
    ("1674", "place_of_worship", Kml, Circle),
    ("1675", "religion_jewish", Kml, Circle),
    ("1676", "place_of_worship", Kml, Circle),
    ("1677", "religion_shinto", Kml, Circle),
    ("1678", "religion_sikh", Kml, Circle),
    ("1679", "shop_pet", Kml, Circle),
    ("1680", "special_walking", Kml, Circle),
    ("1681", "sport_sailing", Kml, Circle),
    ("1682", "amenity_school", Kml, Circle),
    ("1683", "shop_shoes", Kml, Circle),
    ("1684", "shop", Kml, Circle),
    ("1685", "shop_supermarket", Kml, Circle),
    ("1686", "food_shop", Kml, Circle),
    ("1687", "shower", Kml, Circle),
    ("1688", "sport_skiing", Kml, Circle),
    ("1689", "aerialway_chair_lift", Kml, Circle),
    ("1690", "special_ski_touring", Kml, Circle),
    ("1691", "piste_sled", Kml, Circle),
    ("1692", "seasonal_winter", Kml, Circle),
    ("1693", "man_made_chimney", Kml, Circle),
    ("1694", "seasonal_winter", Kml, Circle),
    ("1695", "seasonal_winter", Kml, Circle),
    ("1696", "sport_soccer", Kml, Circle),
    ("1697", "tanning_salon", Kml, Circle),
    ("1698", "sport_stadium", Kml, Circle),
    ("1699", "bag", Kml, Circle),
    ("1700", "seasonal_summer", Kml, Circle),
    ("1701", "sport_swimming", Kml, Circle),
    ("1702", "water_tap", Kml, Circle),
    ("1703", "water_tap", Kml, Circle),
    ("1704", "special_taxi", Kml, Circle),
    ("1705", "tea", Kml, Circle),
    ("1706", "historic_castle", Kml, Circle),
    ("1707", "sport_tennis", Kml, Circle),
    ("1708", "amenity_theatre", Kml, Circle),
    ("1709", "amenity_theatre", Kml, Circle),
    ("1710", "temperature", Kml, Circle),
    ("1711", "power", Kml, Circle),
    ("1712", "shop_ticket", Kml, Circle),
    ("1713", "shop_ticket", Kml, Circle),
    ("1714", "hazard", Kml, Circle),
    ("1715", "special_poi_eiffel_tower", Kml, Circle),
    ("1716", "railway_station", Kml, Circle),
    ("1717", "locomotive", Kml, Circle),
    ("1718", "railway_tram_stop", Kml, Circle),
    ("1719", "railway_tram_stop", Kml, Circle),
    ("1720", "forest", Kml, Circle),
    ("1721", "forest", Kml, Circle),
    ("1722", "special_truck", Kml, Circle),
    ("1723", "water", Kml, Circle),
    ("1724", "tunnel", Kml, Circle),
    ("1725", "electronics", Kml, Circle),
    ("1726", "amenity_university", Kml, Circle),
    ("1727", "special_video_camera", Kml, Circle),
    ("1728", "for_tourists", Kml, Circle),
    ("1729", "tourism_viewpoint", Kml, Circle),
    ("1730", "volcano", Kml, Circle),
    ("1731", "special_walking", Kml, Circle),
    ("1732", "male_yes", Kml, Circle),
    ("1733", "amenity_toilets", Kml, Circle),
    ("1734", "female_yes", Kml, Circle),
    ("1735", "wheelchair_designated", Kml, Circle),
    ("1736", "windsock", Kml, Circle),
    ("1737", "training_yoga", Kml, Circle),
    ("1739", "military", Kml, Circle),
    ("1740", "amenity_school", Kml, Circle),
    ("1741", "amenity_car_rental", Kml, Circle),
    ("1742", "baby_hatch", Kml, Circle),
    ("1743", "tourism_zoo", Kml, Circle),
    ("1745", "1787", Kml, Circle),
    ("1746", "1787", Kml, Circle),
    ("1747", "billiards", Kml, Circle),
    ("1748", "hazard", Kml, Circle),
    ("1749", "defibrillator", Kml, Circle),
    ("1750", "air_transport", Kml, Circle),
    ("1751", "telescope", Kml, Circle),
    ("1752", "sport_archery", Kml, Circle),
    ("1753", "amenity_atm", Kml, Circle),
    ("1754", "special_utv", Kml, Circle),
    ("1755", "badminton", Kml, Circle),
    ("1756", "amenity_bank", Kml, Circle),
    ("1757", "amenity_bank", Kml, Circle),
    ("1758", "amenity_bank", Kml, Circle),
    ("1759", "shop_pet", Kml, Circle),
    ("1760", "leisure_bird_hide", Kml, Circle),
    ("1761", "special_symbol_question_mark", Kml, Circle),
    ("1762", "pastry", Kml, Circle),
    ("1763", "special_camper", Kml, Circle),
    ("1764", "firepit", Kml, Circle),
    ("1765", "tourism_camp_site", Kml, Circle),
    ("1766", "shop_pet", Kml, Circle),
    ("1767", "natural_cave_entrance", Kml, Circle),
    ("1768", "natural_cave_entrance", Kml, Circle),
    ("1769", "special_symbol_check_mark", Kml, Circle),
    ("1770", "craft_sawmill", Kml, Circle),
    ("1771", "sport_climbing", Kml, Circle),
    ("1772", "sport_climbing_adventure", Kml, Circle),
    ("1773", "dance_floor", Kml, Circle),
    ("1774", "conference_centre", Kml, Circle),
    ("1776", "dovecote", Kml, Circle),
    ("1777", "sport_diving", Kml, Circle),
    ("1778", "shop_pet", Kml, Circle),
    ("1779", "shop_seafood", Kml, Circle),
    ("1780", "dovecote", Kml, Circle),
    ("1781", "sanitary_dump_station", Kml, Circle),
    ("1782", "elevator", Kml, Circle),
    ("1783", "building_entrance", Kml, Circle),
    ("1784", "conveying_yes", Kml, Circle),
    ("1785", "conveying_yes", Kml, Circle),
    ("1786", "conveying_yes", Kml, Circle),
    ("1787", "charging_station", Kml, Circle),
    ("1788", "historic_battlefield", Kml, Circle),
    ("1789", "dovecote", Kml, Circle),
    ("1790", "fire_extinguisher", Kml, Circle),
    ("1791", "amenity_fire_station", Kml, Circle),
    ("1792", "frozen_food", Kml, Circle),
    ("1793", "shop_pet", Kml, Circle),
    ("1794", "leisure_sports_centre", Kml, Circle),
    ("1795", "attraction_animal", Kml, Circle),
    ("1796", "dive", Kml, Circle),
    ("1797", "attraction_animal", Kml, Circle),
    ("1798", "craft_winery", Kml, Circle),
    ("1799", "golf_course", Kml, Circle),
    ("1800", "barbecue", Kml, Circle),
    ("1801", "club_music", Kml, Circle),
    ("1802", "special_symbol_question_mark", Kml, Circle),
    ("1803", "special_arrow_down_left", Kml, Circle),
    ("1804", "historic_manor", Kml, Circle),
    ("1805", "ice_hockey", Kml, Circle),
    ("1806", "clinic", Kml, Circle),
    ("1807", "clinic", Kml, Circle),
    ("1808", "clinic", Kml, Circle),
    ("1809", "sauna", Kml, Circle),
    ("1810", "restaurants", Kml, Circle),
    ("1811", "natural_hot_spring", Kml, Circle),
    ("1812", "amenity_hunting_stand", Kml, Circle),
    ("1813", "reef", Kml, Circle),
    ("1814", "special_symbol_question_mark", Kml, Circle),
    ("1815", "attraction_animal", Kml, Circle),
    ("1816", "kitchen", Kml, Circle),
    ("1817", "special_symbol_question_mark", Kml, Circle),
    ("1818", "dovecote", Kml, Circle),
    ("1819", "reef", Kml, Circle),
    ("1820", "shop_computer", Kml, Circle),
    ("1821", "shop_laundry", Kml, Circle),
    ("1822", "attraction_animal", Kml, Circle),
    ("1823", "craft_locksmith", Kml, Circle),
    ("1824", "special_symbol_question_mark", Kml, Circle),
    ("1825", "judo", Kml, Circle),
    ("1826", "emergency_access_point", Kml, Circle),
    ("1827", "special_symbol_question_mark", Kml, Circle),
    ("1828", "attraction_animal", Kml, Circle),
    ("1829", "customs", Kml, Circle),
    ("1831", "dance_floor", Kml, Circle),
    ("1832", "deadlock", Kml, Circle),
    ("1834", "tourism_museum", Kml, Circle),
    ("1835", "restaurants", Kml, Circle),
    ("1836", "smoking_no", Kml, Circle),
    ("1837", "piste_nordic", Kml, Circle),
    ("1838", "sport_free_flying", Kml, Circle),
    ("1839", "dovecote", Kml, Circle),
    ("1840", "dovecote", Kml, Circle),
    ("1841", "amenity_pharmacy", Kml, Circle),
    ("1842", "amenity_police", Kml, Circle),
    ("1843", "equestrian", Kml, Circle),
    ("1844", "shop_baby_goods", Kml, Circle),
    ("1845", "shop_copyshop", Kml, Circle),
    ("1846", "dovecote", Kml, Circle),
    ("1847", "hunting", Kml, Circle),
    ("1848", "shop_pet", Kml, Circle),
    ("1849", "sport_tennis", Kml, Circle),
    ("1850", "recycling_centre", Kml, Circle),
    ("1851", "attraction_animal", Kml, Circle),
    ("1852", "special_symbol_question_mark", Kml, Circle),
    ("1853", "quarry", Kml, Circle),
    ("1854", "educational_institution", Kml, Circle),
    ("1856", "telescope", Kml, Circle),
    ("1857", "waste_basket", Kml, Circle),
    ("1858", "sport_rugby_union", Kml, Circle),
    ("1859", "special_campervan", Kml, Circle),
    ("1860", "amenity_school", Kml, Circle),
    ("1861", "sport_scuba_diving", Kml, Circle),
    ("1862", "email", Kml, Circle),
    ("1863", "shop_seafood", Kml, Circle),
    ("1864", "wreck", Kml, Circle),
    ("1865", "shower", Kml, Circle),
    ("1866", "sport_skateboard", Kml, Circle),
    ("1867", "ice_skating", Kml, Circle),
    ("1868", "smoking_yes", Kml, Circle),
    ("1869", "special_symbol_question_mark", Kml, Circle),
    ("1870", "scuba_diving_shop", Kml, Circle),
    ("1871", "entertainment", Kml, Circle),
    ("1872", "special_snowmobile", Kml, Circle),
    ("1873", "piste_hike", Kml, Circle),
    ("1874", "dovecote", Kml, Circle),
    ("1875", "sport_tennis", Kml, Circle),
    ("1876", "shop_pet", Kml, Circle),
    ("1877", "highway_steps", Kml, Circle),
    ("1878", "telescope_type_optical", Kml, Circle),
    ("1879", "amenity_biergarten", Kml, Circle),
    ("1880", "sport_surfing", Kml, Circle),
    ("1881", "sport_sailing", Kml, Circle),
    ("1882", "reef", Kml, Circle),
    ("1883", "craft_agricultural_engines", Kml, Circle),
    ("1884", "highway_traffic_signals", Kml, Circle),
    ("1885", "special_symbol_question_mark", Kml, Circle),
    ("1886", "nature_reserve", Kml, Circle),
    ("1887", "female_no", Kml, Circle),
    ("1888", "reef", Kml, Circle),
    ("1889", "telescope", Kml, Circle),
    ("1890", "sport_volleyball", Kml, Circle),
    ("1891", "backrest_yes", Kml, Circle),
    ("1892", "waterfall", Kml, Circle),
    ("1893", "sports_hall", Kml, Circle),
    ("1894", "shop_seafood", Kml, Circle),
    ("1895", "internet_access_wlan", Kml, Circle),
    ("1896", "firepit", Kml, Circle),
    ("1897", "free_flying", Kml, Circle),
    ("1898", "special_symbol_remove", Kml, Circle),
    ("1899", "special_marker", Kml, Circle),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_icon_with_fixed_color() {
        let entry = resolve("979");
        assert_eq!(entry.icon, "special_sail_boat");
        assert_eq!(entry.color, Fixed("a71de1"));
        assert_eq!(entry.background, Circle);
    }

    #[test]
    fn test_known_icon_with_kml_color() {
        let entry = resolve("1577");
        assert_eq!(entry.icon, "restaurants");
        assert_eq!(entry.color, Kml);
    }

    #[test]
    fn test_unknown_icon_falls_back() {
        let entry = resolve("99999");
        assert_eq!(entry.icon, "special_symbol_question_mark");
        assert_eq!(entry.color, Fixed("e044bb"));
        assert_eq!(entry.background, Octagon);
        assert_eq!(entry, resolve("unknown"));
    }

    #[test]
    fn test_table_has_no_duplicate_codes() {
        assert_eq!(ICON_INDEX.len(), ICON_TABLE.len());
    }

    #[test]
    fn test_every_entry_resolves_to_itself() {
        for &(id, icon, color, background) in ICON_TABLE {
            let entry = resolve(id);
            assert_eq!(entry, IconEntry { icon, color, background });
        }
    }
}
