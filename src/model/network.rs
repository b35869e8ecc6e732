//! Network detail records attached to findings

use super::Double;

shape! {
    /// Local side of a network connection
    pub struct LocalIpDetails = "LocalIpDetails" {
        /// IPv4 address, e.g. `10.0.0.1`
        ip_address_v4 [set_ip_address_v4, with_ip_address_v4]: String as "IpAddressV4",
    }
}

shape! {
    /// Remote side of a network connection
    pub struct RemoteIpDetails = "RemoteIpDetails" {
        city [set_city, with_city]: City as "City",
        country [set_country, with_country]: Country as "Country",
        geo_location [set_geo_location, with_geo_location]: GeoLocation as "GeoLocation",
        ip_address_v4 [set_ip_address_v4, with_ip_address_v4]: String as "IpAddressV4",
        /// ISP and autonomous system of the remote address
        organization [set_organization, with_organization]: Organization as "Organization",
    }
}

shape! {
    pub struct City = "City" {
        city_name [set_city_name, with_city_name]: String as "CityName",
    }
}

shape! {
    /// Latitude and longitude of an address, in degrees
    pub struct GeoLocation = "GeoLocation" {
        lat [set_lat, with_lat]: Double as "Lat",
        lon [set_lon, with_lon]: Double as "Lon",
    }
}

shape! {
    pub struct Country = "Country" {
        /// ISO 3166 country code
        country_code [set_country_code, with_country_code]: String as "CountryCode",
        country_name [set_country_name, with_country_name]: String as "CountryName",
    }
}

shape! {
    pub struct Organization = "Organization" {
        /// Autonomous system number
        asn [set_asn, with_asn]: String as "Asn",
        asn_org [set_asn_org, with_asn_org]: String as "AsnOrg",
        isp [set_isp, with_isp]: String as "Isp",
        org [set_org, with_org]: String as "Org",
    }
}

shape! {
    /// Secondary private address of a network interface
    pub struct PrivateIpAddressDetails = "PrivateIpAddressDetails" {
        private_dns_name [set_private_dns_name, with_private_dns_name]: String as "PrivateDnsName",
        private_ip_address [set_private_ip_address, with_private_ip_address]:
            String as "PrivateIpAddress",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Shape;

    #[test]
    fn test_local_ip_details() {
        let details = LocalIpDetails::new().with_ip_address_v4("10.0.0.1");

        assert_eq!(details.to_string(), "{IpAddressV4: 10.0.0.1}");
        assert_eq!(details.structural_hash(), 31 + 511552166);
        assert_eq!(
            serde_json::to_string(&details).unwrap(),
            r#"{"ipAddressV4":"10.0.0.1"}"#
        );
    }

    #[test]
    fn test_empty_string_is_present() {
        let empty = LocalIpDetails::new().with_ip_address_v4("");
        let absent = LocalIpDetails::new();

        assert_eq!(empty.ip_address_v4(), Some(""));
        assert_eq!(empty.to_string(), "{IpAddressV4: }");
        assert_ne!(empty, absent);
    }

    #[test]
    fn test_remote_details_nested_from_wire() {
        let json = r#"{
            "ipAddressV4": "198.51.100.7",
            "city": { "cityName": "Frankfurt" },
            "country": { "countryCode": "DE", "countryName": "Germany" },
            "organization": { "asn": "64496", "asnOrg": "Example AS", "isp": "Example ISP", "org": "Example" },
            "geoLocation": { "lat": 50.1, "lon": 8.6 }
        }"#;

        let details: RemoteIpDetails = serde_json::from_str(json).unwrap();

        assert_eq!(details.city().and_then(City::city_name), Some("Frankfurt"));
        assert_eq!(details.country().and_then(Country::country_code), Some("DE"));
        assert_eq!(details.organization().and_then(Organization::asn), Some("64496"));
        assert_eq!(details.geo_location().and_then(GeoLocation::lat), Some(50.1));
        assert_eq!(
            details.to_string(),
            "{City: {CityName: Frankfurt}, Country: {CountryCode: DE, CountryName: Germany}, \
             GeoLocation: {Lat: 50.1, Lon: 8.6}, IpAddressV4: 198.51.100.7, \
             Organization: {Asn: 64496, AsnOrg: Example AS, Isp: Example ISP, Org: Example}}"
        );
    }

    #[test]
    fn test_private_ip_setter_and_builder_agree() {
        let built = PrivateIpAddressDetails::new()
            .with_private_dns_name("ip-10-0-0-1.ec2.internal")
            .with_private_ip_address("10.0.0.1");

        let mut set = PrivateIpAddressDetails::new();
        set.set_private_dns_name(Some("ip-10-0-0-1.ec2.internal".to_string()));
        set.set_private_ip_address(Some("10.0.0.1".to_string()));

        assert_eq!(built, set);
        assert_eq!(built.structural_hash(), set.structural_hash());
    }

    #[test]
    fn test_geo_location_hash_and_wire_round_trip() {
        let location = GeoLocation::new().with_lat(50.1).with_lon(8.6);
        assert_eq!(location.structural_hash(), 2000962528);

        let json = serde_json::to_string(&location).unwrap();
        assert_eq!(json, r#"{"lat":50.1,"lon":8.6}"#);

        let back: GeoLocation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, location);
        assert_eq!(back.lon(), Some(8.6));
    }
}
