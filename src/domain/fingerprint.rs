// src/domain/fingerprint.rs

use crate::domain::Listing;

/// Build the identity string for a listing from its immutable attributes.
///
/// Two physically distinct listings that agree on all eight attributes are
/// indistinguishable here; that is an accepted limitation of the scheme.
pub fn fingerprint_of(listing: &Listing) -> String {
    format!(
        "{}|{}|{}|{}|{}|{}|{}|{}",
        listing.apartment_type,
        listing.neighborhood,
        listing.room_layout,
        listing.building_type,
        number_part(listing.area_sqm),
        number_part(listing.price),
        number_part(listing.construction_year),
        listing.floor_info,
    )
}

/// Stamp every record. Must run before reconciliation; order-independent.
pub fn assign_fingerprints(listings: &mut [Listing]) {
    for listing in listings {
        listing.fingerprint = fingerprint_of(listing);
    }
}

// f64 Display keeps whole values whole: 55.0 -> "55", 55.5 -> "55.5".
fn number_part(value: Option<f64>) -> String {
    match value {
        Some(n) => n.to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> Listing {
        Listing {
            apartment_type: "2h+kk".into(),
            neighborhood: "Keskusta".into(),
            room_layout: "2".into(),
            building_type: "kerrostalo".into(),
            area_sqm: Some(55.0),
            price: Some(250000.0),
            price_per_sqm: Some(4545.0),
            construction_year: Some(1990.0),
            floor_info: "3".into(),
            has_elevator: true,
            condition: "hyvä".into(),
            ownership_type: "oma".into(),
            energy_class: "D".into(),
            fingerprint: String::new(),
        }
    }

    #[test]
    fn whole_numbers_render_without_decimals() {
        assert_eq!(
            fingerprint_of(&listing()),
            "2h+kk|Keskusta|2|kerrostalo|55|250000|1990|3"
        );
    }

    #[test]
    fn identical_attributes_identical_fingerprint() {
        assert_eq!(fingerprint_of(&listing()), fingerprint_of(&listing()));
    }

    #[test]
    fn each_identity_field_changes_the_fingerprint() {
        let base = fingerprint_of(&listing());

        let variants: Vec<Listing> = vec![
            {
                let mut l = listing();
                l.apartment_type = "Yksiöt".into();
                l
            },
            {
                let mut l = listing();
                l.neighborhood = "Tapiola".into();
                l
            },
            {
                let mut l = listing();
                l.room_layout = "3".into();
                l
            },
            {
                let mut l = listing();
                l.building_type = "rivitalo".into();
                l
            },
            {
                let mut l = listing();
                l.area_sqm = Some(56.0);
                l
            },
            {
                let mut l = listing();
                l.price = Some(251000.0);
                l
            },
            {
                let mut l = listing();
                l.construction_year = Some(1991.0);
                l
            },
            {
                let mut l = listing();
                l.floor_info = "4".into();
                l
            },
        ];

        for variant in variants {
            assert_ne!(
                fingerprint_of(&variant),
                base,
                "changing a field should change the fingerprint"
            );
        }
    }

    #[test]
    fn non_identity_fields_do_not_matter() {
        let mut l = listing();
        l.has_elevator = false;
        l.condition = "tyyd.".into();
        l.energy_class = "G".into();
        l.price_per_sqm = Some(9999.0);
        assert_eq!(fingerprint_of(&l), fingerprint_of(&listing()));
    }

    #[test]
    fn missing_numbers_render_empty() {
        let mut l = listing();
        l.area_sqm = None;
        assert_eq!(
            fingerprint_of(&l),
            "2h+kk|Keskusta|2|kerrostalo||250000|1990|3"
        );
    }

    #[test]
    fn assign_stamps_every_record() {
        let mut records = vec![listing(), listing()];
        records[1].neighborhood = "Tapiola".into();

        assign_fingerprints(&mut records);

        assert_eq!(records[0].fingerprint, fingerprint_of(&records[0]));
        assert_eq!(records[1].fingerprint, fingerprint_of(&records[1]));
        assert_ne!(records[0].fingerprint, records[1].fingerprint);
    }
}
