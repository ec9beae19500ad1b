//! Heuristic normalisation of the free-text country field on document authors.
//!
//! Authors frequently put a postal address, a city, an employer or nothing
//! useful at all into the country field. The tables below map the common
//! cases onto a consistent country name. Each table is tried in order and the
//! first case-insensitive substring match wins.

use std::sync::LazyLock;

use regex::Regex;

const US_STATES: [&str; 51] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA", "KS",
    "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ", "NM", "NY",
    "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT", "VA", "WA", "WV",
    "WI", "WY", "DC",
];

/// A US state abbreviation followed by a five digit ZIP code, e.g. `CA 94043`.
#[allow(clippy::expect_used)]
static US_STATE_ZIP: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!("(?:{}),? +[0-9]{{5}}", US_STATES.join("|"));
    Regex::new(&pattern).expect("state/ZIP regex is valid") // Static pattern, safe to panic
});

const COUNTRIES: &[&str] = &[
    "Algeria", "Argentina", "Austria", "Australia", "Belgium", "Brazil", "Canada", "Chile",
    "China", "Colombia", "Croatia", "Czech Republic", "Denmark", "Egypt", "Finland", "France",
    "Germany", "Greece", "Hungary", "Ireland", "India", "Israel", "Italy", "Japan", "Lebanon",
    "Luxembourg", "Mauritius", "Mexico", "Morocco", "New Zealand", "Norway", "Philippines",
    "Poland", "Portugal", "Romania", "Russia", "Saudi Arabia", "Singapore", "Slovakia",
    "Slovenia", "Spain", "South Africa", "Switzerland", "Sweden", "Syria", "Taiwan", "Thailand",
    "The Netherlands", "Turkey", "Ukraine", "UK", "Uruguay", "USA", "United Arab Emirates",
];

const SYNONYMS: &[(&str, &str)] = &[
    ("Hellas", "Greece"),
    ("Italia", "Italy"),
    ("Korea", "South Korea"),
    ("Netherlands", "The Netherlands"),
    ("P.R.C", "China"),
    ("PRC", "China"),
    ("REPUBLIC OF KOREA", "South Korea"),
    ("Russian Federation", "Russia"),
    ("Great Britain", "UK"),
    ("U.K.", "UK"),
    ("United Kingdom", "UK"),
    ("U.S.A", "USA"),
    ("United States", "USA"),
];

const PLACES: &[(&str, &str)] = &[
    ("Auckland", "New Zealand"),
    ("Bangalore", "India"),
    ("Barcelona", "Spain"),
    ("Beijing", "China"),
    ("Bruxelles", "Belgium"),
    ("Frankfurt", "Germany"),
    ("Leuven", "Belgium"),
    ("Linkoping", "Sweden"),
    ("Madrid", "Spain"),
    ("Riga", "Latvia"),
    ("Solna", "Sweden"),
    ("Taipei", "Taiwan"),
    ("Tel Aviv", "Israel"),
    ("Tokyo", "Japan"),
    ("Toranomon 17 Mori Bldg.5F", "Japan"),
    ("750D Chai Chee", "Singapore"),
    // Canada
    ("Mississauga, ON", "Canada"),
    ("Ottawa", "Canada"),
    ("Toronto", "Canada"),
    ("100 Wynford Drive", "Canada"),
    // US states
    ("Arizona", "USA"),
    ("California", "USA"),
    ("Colorado", "USA"),
    ("Florida", "USA"),
    ("Illinois", "USA"),
    ("Kansas", "USA"),
    ("Maryland", "USA"),
    ("Massachusetts", "USA"),
    ("Michigan", "USA"),
    ("New Hampshire", "USA"),
    ("New Jersey", "USA"),
    ("Ohio", "USA"),
    ("Oregon", "USA"),
    ("Texas", "USA"),
    ("Vermont", "USA"),
    ("Virginia", "USA"),
    // US cities
    ("Atlanta", "USA"),
    ("Bainbridge Island, WA", "USA"),
    ("Bellevue, WA", "USA"),
    ("Boulder CO", "USA"),
    ("Boulder, CO", "USA"),
    ("Boxborough, MA", "USA"),
    ("Burlington, MA", "USA"),
    ("Cambridge, MA", "USA"),
    ("Campbell, CA", "USA"),
    ("Chelmsford, MA", "USA"),
    ("Dallas TX", "USA"),
    ("Dallas, TX", "USA"),
    ("Denver, CO", "USA"),
    ("Edison, NJ", "USA"),
    ("Florham Park NJ", "USA"),
    ("Ft. Meade, MD", "USA"),
    ("Ft. Monmouth, N.J.", "USA"),
    ("Littleton MA", "USA"),
    ("Lowell, MA", "USA"),
    ("Menlo Park, CA", "USA"),
    ("Milpitas, CA", "USA"),
    ("Mountain View, CA", "USA"),
    ("Naperville, IL", "USA"),
    ("New York", "USA"),
    ("Evanston, IL", "USA"),
    ("Philadelphia", "USA"),
    ("Princeton, NJ", "USA"),
    ("Raleigh, NC", "USA"),
    ("Redmond, WA", "USA"),
    ("Richardson, TX", "USA"),
    ("Salt Lake City", "USA"),
    ("San Jose, CA", "USA"),
    ("Santa Barbara, CA", "USA"),
    ("Schaumburg, IL", "USA"),
    ("Seattle, WA", "USA"),
    ("St. Louis, MO", "USA"),
    ("Stanford, CA", "USA"),
    ("Sunnyvale, CA", "USA"),
    ("Tewksbury, MA", "USA"),
    ("Wall Township, NJ", "USA"),
    ("Waltham, MA", "USA"),
    // US street addresses
    ("West Tasman Dr", "USA"),
    ("1700 Alma Drive", "USA"),
    ("1201 Campbell", "USA"),
    ("3 Federal Street", "USA"),
    ("501 East Middlefield Road", "USA"),
    // UK nations, counties and cities
    ("England", "UK"),
    ("Scotland", "UK"),
    ("Wales", "UK"),
    ("Berks", "UK"),
    ("Cambs", "UK"),
    ("Essex", "UK"),
    ("Gwent", "UK"),
    ("Hampshire", "UK"),
    ("Surrey", "UK"),
    ("Middlesex", "UK"),
    ("Aberdeen AB24", "UK"),
    ("Cambridge", "UK"),
    ("Edinburgh", "UK"),
    ("Ipswich", "UK"),
    ("Maidenhead", "UK"),
    ("Nottingham", "UK"),
    ("Reading", "UK"),
    ("London", "UK"),
    ("Oxford", "UK"),
    ("Winchester", "UK"),
];

const ORGANISATIONS: &[(&str, &str)] = &[
    ("Aoyama Gakuin University", "Japan"),
    ("University of Cambridge", "UK"),
    ("Columbia University", "USA"),
    ("University of Illinois", "USA"),
    ("University of Washington", "USA"),
    ("National Security Agency", "USA"),
    ("ICSI Center for Internet Research", "USA"),
    ("Schrage Consulting", "Germany"),
    ("Samsung Electronics", "South Korea"),
    ("Nishinippori Start up Office 214", "Japan"),
];

const POSTCODES: &[(&str, &str)] = &[
    ("H3B 2S2", "Canada"),
    ("H4P 2N2", "Canada"),
    ("K1Y 4H7", "Canada"),
    ("K1Y-4H7", "Canada"),
    ("K2K 3N1", "Canada"),
    ("V5H 4M2", "Canada"),
    ("V7X 1M3 ", "Canada"),
    ("F-22307", "France"),
    ("FIN-00076", "Finland"),
    ("CH-6942", "Switzerland"),
    ("CB3 0FD", "UK"),
    ("WR14 3PS", "UK"),
    ("02144", "USA"),
    ("02138", "USA"),
    ("20166", "USA"),
    ("94704-1198", "USA"),
    ("95110", "USA"),
    ("Post Office Box 5005", "USA"),
    ("7010", "Belgium"),
];

const PEOPLE: &[(&str, &str)] = &[("Robert Schuettler", "Germany"), ("Mike St. Johns", "USA")];

const ABBREVIATIONS: &[(&str, &str)] = &[
    ("AU", "Australia"),
    ("BE", "Belgium"),
    ("BR", "Brazil"),
    ("CA", "Canada"),
    ("CH", "Switzerland"),
    ("CN", "China"),
    ("CZ", "Czech Republic"),
    ("DE", "Germany"),
    ("ES", "Spain"),
    ("FI", "Finland"),
    ("FR", "France"),
    ("GE", "Germany"),
    ("GB", "UK"),
    ("GI", "UK"),
    ("IE", "Ireland"),
    ("IL", "Israel"),
    ("IT", "Italy"),
    ("JA", "Japan"),
    ("JP", "Japan"),
    ("MU", "Mauritius"),
    ("NL", "The Netherlands"),
    ("NO", "Norway"),
    ("SE", "Sweden"),
    ("SG", "Singapore"),
    ("US", "USA"),
];

// RFC 3271 has a date where the country should be. Checked before the
// abbreviations, which would otherwise read "JA" as Japan.
const ODDITIES: &[(&str, &str)] = &[("January 2002", "USA")];

/// Maps a free-text country field onto a country name.
///
/// Returns the trimmed input unchanged when nothing matches.
///
/// ```
/// use ietfdata_core::records::normalise_country;
///
/// assert_eq!(normalise_country("Mountain View, CA 94043"), "USA");
/// assert_eq!(normalise_country("Hellas"), "Greece");
/// assert_eq!(normalise_country("  Atlantis "), "Atlantis");
/// ```
#[must_use]
pub fn normalise_country(country: &str) -> String {
    if US_STATE_ZIP.is_match(country) {
        return "USA".to_string();
    }

    let lowered = country.to_lowercase();
    let contains = |needle: &str| lowered.contains(&needle.to_lowercase());

    if let Some(name) = COUNTRIES.iter().find(|name| contains(name)) {
        return (*name).to_string();
    }

    let tables = [SYNONYMS, PLACES, ORGANISATIONS, POSTCODES, PEOPLE, ODDITIES, ABBREVIATIONS];
    tables
        .iter()
        .flat_map(|table| table.iter())
        .find(|(needle, _)| contains(needle))
        .map_or_else(|| country.trim().to_string(), |(_, name)| (*name).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_and_zip() {
        assert_eq!(normalise_country("Cambridge, MA 02139"), "USA");
        assert_eq!(normalise_country("Reston VA, 20190"), "USA");
        assert_eq!(normalise_country("NY  10001"), "USA");
    }

    #[test]
    fn test_state_requires_zip() {
        // "CA" alone falls through to the abbreviation table.
        assert_eq!(normalise_country("CA"), "Canada");
    }

    #[test]
    fn test_country_name_is_case_insensitive() {
        assert_eq!(normalise_country("germany"), "Germany");
        assert_eq!(normalise_country("Tokyo, JAPAN"), "Japan");
    }

    #[test]
    fn test_synonyms() {
        assert_eq!(normalise_country("United Kingdom"), "UK");
        assert_eq!(normalise_country("Russian Federation"), "Russia");
        assert_eq!(normalise_country("Republic of Korea"), "South Korea");
    }

    #[test]
    fn test_places_and_organisations() {
        assert_eq!(normalise_country("Ottawa"), "Canada");
        assert_eq!(normalise_country("Edinburgh"), "UK");
        assert_eq!(normalise_country("Samsung Electronics"), "South Korea");
    }

    #[test]
    fn test_postcode() {
        assert_eq!(normalise_country("K1Y 4H7"), "Canada");
    }

    #[test]
    fn test_oddity_wins_over_abbreviation() {
        assert_eq!(normalise_country("January 2002"), "USA");
    }

    #[test]
    fn test_abbreviation() {
        assert_eq!(normalise_country("DE"), "Germany");
        assert_eq!(normalise_country("SG"), "Singapore");
    }

    #[test]
    fn test_unmatched_is_trimmed() {
        assert_eq!(normalise_country("  Xanadu\n"), "Xanadu");
        assert_eq!(normalise_country(""), "");
    }
}
