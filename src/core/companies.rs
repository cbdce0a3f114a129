use crate::domain::model::Company;

const DIRECTORY: &[(&str, &str, &str, &str)] = &[
    ("Novo Nordisk", "https://www.novonordisk.com/careers/find-a-job.html", "💉", "Bagsværd"),
    ("Maersk", "https://careers.maersk.com/search-jobs", "🚢", "Copenhagen"),
    ("Danske Bank", "https://danskebank.com/careers", "🏦", "Copenhagen"),
    ("Saxo Bank", "https://www.home.saxo/careers", "💹", "Copenhagen"),
    ("Vestas", "https://careers.vestas.com/search", "🌬️", "Aarhus/Copenhagen"),
    ("Ørsted", "https://orsted.com/careers", "⚡", "Fredericia"),
    ("Siteimprove", "https://siteimprove.com/careers/", "🔧", "Copenhagen"),
    ("Lunar", "https://lunar.app/careers", "🌙", "Copenhagen"),
    ("Trustpilot", "https://jobs.trustpilot.com/", "⭐", "Copenhagen"),
    ("Unity", "https://careers.unity.com/", "🎮", "Copenhagen"),
    ("Zendesk", "https://jobs.zendesk.com/us/en", "💬", "Copenhagen"),
    ("SimCorp", "https://www.simcorp.com/careers", "📊", "Copenhagen"),
];

/// Career pages of companies hiring in the Copenhagen area.
pub fn company_directory() -> Vec<Company> {
    DIRECTORY
        .iter()
        .map(|&(name, url, icon, location)| Company {
            name: name.to_string(),
            url: url.to_string(),
            icon: icon.to_string(),
            location: location.to_string(),
        })
        .collect()
}
