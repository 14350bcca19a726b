use crate::api::dtos::MandiResponse;
use crate::domain::Mandi;
use crate::ranking::Ranked;

pub fn map_ranked_mandi_to_response(ranked: Ranked<Mandi>) -> MandiResponse {
    let Ranked { item, distance_km } = ranked;
    MandiResponse {
        id: item.id,
        name: item.name,
        district: item.district,
        state: item.state,
        latitude: item.latitude,
        longitude: item.longitude,
        rating: item.rating,
        facilities: item.facilities,
        commodities: item.commodities,
        is_open: item.is_open,
        distance_km,
        updated_at: item.updated_at,
    }
}
