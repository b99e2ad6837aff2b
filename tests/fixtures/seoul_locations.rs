//! Real Seoul locations for realistic test fixtures.
//!
//! Coordinates are (longitude, latitude), the way local-search providers
//! report map x/y.

use itinerary_planner::Place;

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub address: &'static str,
    pub lng: f64,
    pub lat: f64,
}

impl Location {
    pub const fn new(name: &'static str, address: &'static str, lng: f64, lat: f64) -> Self {
        Self { name, address, lng, lat }
    }

    pub fn to_place(&self, theme: &str) -> Place {
        Place::new(self.name, theme)
            .with_road_address(self.address)
            .with_coordinate(self.lng, self.lat)
    }
}

// ============================================================================
// Restaurants
// ============================================================================

pub const RESTAURANTS: &[Location] = &[
    Location::new("Gwangjang Market", "88 Changgyeonggung-ro, Jongno-gu", 126.9996, 37.5700),
    Location::new("Tosokchon Samgyetang", "5 Jahamun-ro 5-gil, Jongno-gu", 126.9713, 37.5779),
    Location::new("Myeongdong Kyoja", "29 Myeongdong 10-gil, Jung-gu", 126.9857, 37.5627),
    Location::new("Jinokhwa Halmae Wonjo Dakhanmari", "18 Jong-ro 40ga-gil, Jongno-gu", 127.0058, 37.5703),
    Location::new("Mapo Jeong Daepo", "8 Dohwa-gil, Mapo-gu", 126.9490, 37.5397),
    Location::new("Woo Lae Oak", "62-29 Changgyeonggung-ro, Jung-gu", 126.9982, 37.5680),
];

// ============================================================================
// Cafes
// ============================================================================

pub const CAFES: &[Location] = &[
    Location::new("Cafe Onion Anguk", "5 Gyedong-gil, Jongno-gu", 126.9859, 37.5777),
    Location::new("Fritz Coffee Wonseo", "83 Yulgok-ro, Jongno-gu", 126.9887, 37.5768),
    Location::new("Anthracite Hapjeong", "10 Tojeong-ro 5-gil, Mapo-gu", 126.9107, 37.5470),
    Location::new("Cafe Layered Bukchon", "36-1 Bukchon-ro 5-gil, Jongno-gu", 126.9840, 37.5800),
    Location::new("Daelim Changgo", "78 Seongsui-ro, Seongdong-gu", 127.0560, 37.5418),
];

// ============================================================================
// Shopping
// ============================================================================

pub const SHOPPING: &[Location] = &[
    Location::new("Myeongdong Shopping Street", "Myeongdong-gil, Jung-gu", 126.9850, 37.5636),
    Location::new("Insadong Ssamzigil", "44 Insadong-gil, Jongno-gu", 126.9854, 37.5743),
    Location::new("Dongdaemun Design Plaza", "281 Eulji-ro, Jung-gu", 127.0095, 37.5665),
    Location::new("COEX Mall", "513 Yeongdong-daero, Gangnam-gu", 127.0590, 37.5116),
    Location::new("Namdaemun Market", "21 Namdaemunsijang 4-gil, Jung-gu", 126.9776, 37.5592),
];

// ============================================================================
// Sightseeing (anchor candidates)
// ============================================================================

pub const SIGHTS: &[Location] = &[
    Location::new("Gyeongbokgung Palace", "161 Sajik-ro, Jongno-gu", 126.9770, 37.5796),
    Location::new("N Seoul Tower", "105 Namsangongwon-gil, Yongsan-gu", 126.9882, 37.5512),
    Location::new("Lotte World Tower", "300 Olympic-ro, Songpa-gu", 127.1025, 37.5126),
];

/// The full themed pool: restaurants, cafes, shopping, in that order.
pub fn seoul_pool() -> Vec<Place> {
    RESTAURANTS
        .iter()
        .map(|l| l.to_place("restaurant"))
        .chain(CAFES.iter().map(|l| l.to_place("cafe")))
        .chain(SHOPPING.iter().map(|l| l.to_place("shopping")))
        .collect()
}

pub fn seoul_anchors() -> Vec<Place> {
    SIGHTS.iter().map(|l| l.to_place("sightseeing")).collect()
}
