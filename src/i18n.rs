//! Language context: a static key -> string table per language.
//!
//! Lookups fall back to the key itself, so untranslated data values (data
//! types, organization names) pass through unchanged.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::sync::LazyLock;

#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
}

impl Language {
    /// Translate `key`, returning the key unchanged when it has no entry.
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        let table = match self {
            Language::En => &*EN,
            Language::Hi => &*HI,
        };
        table.get(key).copied().unwrap_or(key)
    }

    /// The other language.
    pub fn toggled(&self) -> Self {
        match self {
            Language::En => Language::Hi,
            Language::Hi => Language::En,
        }
    }

    /// The language's name, written in that language.
    pub fn name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "हिंदी",
        }
    }

    /// Label of the language-switch control, naming the language it switches to.
    pub fn switch_label(&self) -> &'static str {
        self.toggled().name()
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

static EN: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| EN_ENTRIES.iter().copied().collect());

static HI: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| HI_ENTRIES.iter().copied().collect());

const EN_ENTRIES: &[(&str, &str)] = &[
    ("consent", "Consent"),
    ("downloadData", "Download Data"),
    ("revokeConsent", "Revoke Consent"),
    ("accessLogs", "Access Logs"),
    ("connectionDetails", "Connection Details"),
    ("timeline", "Timeline"),
    ("dataTypes", "Data Types"),
    ("permissions", "Permissions"),
    ("consentManager", "Consent Manager"),
    ("activeConsents", "Active Consents"),
    ("export", "Export"),
    ("locker", "Locker"),
    ("lockerTitle", "Secure Data Storage Container"),
    ("changeLanguage", "Change Language"),
    ("newConsent", "New Consent"),
    ("profile", "Profile"),
    ("settings", "Settings"),
    ("cardView", "Card View"),
    ("tableView", "Table View"),
    ("analyticsView", "Analytics View"),
    ("showing", "Showing"),
    ("of", "of"),
    ("consents", "consents"),
    ("searchByName", "Search by name..."),
    ("status", "Status"),
    ("allStatus", "All Status"),
    ("risk", "Risk"),
    ("allRisk", "All Risk"),
    ("low", "Low"),
    ("medium", "Medium"),
    ("high", "High"),
    ("sortBy", "Sort by"),
    ("createdDate", "Created Date"),
    ("expiryDate", "Expiry Date"),
    ("organization", "Organization"),
    ("accessCount", "Access Count"),
    ("resetFilters", "Reset Filters"),
    ("removeStatusFilter", "Remove status filter"),
    ("removeRiskFilter", "Remove risk filter"),
    ("totalConsents", "Total Consents"),
    ("active", "Active"),
    ("expired", "Expired"),
    ("pending", "Pending"),
    ("revoked", "Revoked"),
    ("highRisk", "High Risk"),
    ("totalAccess", "Total Access"),
    ("hostUser", "Host User"),
    ("hostLocker", "Host Locker"),
    ("guestLocker", "Guest Locker"),
    ("purpose", "Purpose"),
    ("validFrom", "Valid From"),
    ("lastAccessed", "Last Accessed"),
    ("Resume", "Resume"),
    ("Certificates", "Certificates"),
    ("References", "References"),
    ("Email", "Email"),
    ("Phone", "Phone"),
    ("Address", "Address"),
    ("read", "Read"),
    ("write", "Write"),
    ("share", "Share"),
    ("consentOverview", "Consent Overview"),
    ("searchAndFilters", "Search & Filters"),
    ("yourConsents", "Your Consents"),
    // Terminal-only strings
    ("search", "Search"),
    ("type", "Type"),
    ("expires", "Expires"),
    ("accesses", "accesses"),
    ("more", "more"),
    ("selected", "selected"),
    ("exportSelected", "Export Selected"),
    ("revokeSelected", "Revoke Selected"),
    ("ascending", "Ascending"),
    ("descending", "Descending"),
    ("noConsentsFound", "No consents found"),
    ("adjustCriteria", "Try adjusting your search or filter criteria."),
    ("noMatchingConsents", "No consents found matching your criteria."),
    ("riskDistribution", "Risk Distribution"),
    ("statusDistribution", "Status Distribution"),
    ("expiringConsents", "Expiring Consents"),
    ("accessFrequency", "Access Frequency"),
    ("accessedByUser", "Accessed by user"),
    ("consentCreated", "Consent created"),
    ("highRiskConsent", "High Risk Consent"),
    ("nearExpiry", "Consent is expired or near expiry"),
    ("sensitiveData", "Contains sensitive data"),
    ("highAccessVolume", "High access volume detected"),
    ("suggestedActions", "Suggested Actions"),
    ("revoke", "Revoke"),
    ("modify", "Modify"),
    ("investigateAccess", "Investigate Access"),
    ("activityLog", "Activity Log"),
];

const HI_ENTRIES: &[(&str, &str)] = &[
    ("consent", "सहमति"),
    ("downloadData", "डेटा डाउनलोड करें"),
    ("revokeConsent", "सहमति रद्द करें"),
    ("accessLogs", "पहुंच लॉग्स"),
    ("connectionDetails", "कनेक्शन विवरण"),
    ("timeline", "समयरेखा"),
    ("dataTypes", "डेटा प्रकार"),
    ("permissions", "अनुमतियाँ"),
    ("consentManager", "सहमति प्रबंधक"),
    ("activeConsents", "सक्रिय सहमतियाँ"),
    ("export", "निर्यात करें"),
    ("locker", "लॉकर"),
    ("lockerTitle", "सुरक्षित डेटा भंडारण कंटेनर"),
    ("changeLanguage", "भाषा बदलें"),
    ("newConsent", "नई सहमति"),
    ("profile", "प्रोफ़ाइल"),
    ("settings", "सेटिंग्स"),
    ("cardView", "कार्ड दृश्य"),
    ("tableView", "तालिका दृश्य"),
    ("analyticsView", "विश्लेषण दृश्य"),
    ("showing", "दिखा रहे हैं"),
    ("of", "में से"),
    ("consents", "सहमतियाँ"),
    ("searchByName", "नाम से खोजें..."),
    ("status", "स्थिति"),
    ("allStatus", "सभी स्थिति"),
    ("risk", "जोखिम"),
    ("allRisk", "सभी जोखिम"),
    ("low", "निम्न"),
    ("medium", "मध्यम"),
    ("high", "उच्च"),
    ("sortBy", "क्रमबद्ध करें"),
    ("createdDate", "निर्माण तिथि"),
    ("expiryDate", "समाप्ति तिथि"),
    ("organization", "संगठन"),
    ("accessCount", "पहुंच संख्या"),
    ("resetFilters", "फ़िल्टर रीसेट करें"),
    ("removeStatusFilter", "स्थिति फ़िल्टर हटाएँ"),
    ("removeRiskFilter", "जोखिम फ़िल्टर हटाएँ"),
    ("totalConsents", "कुल सहमतियाँ"),
    ("active", "सक्रिय"),
    ("expired", "समाप्त"),
    ("pending", "लंबित"),
    ("revoked", "रद्द"),
    ("highRisk", "उच्च जोखिम"),
    ("totalAccess", "कुल पहुंच"),
    ("hostUser", "मेज़बान उपयोगकर्ता"),
    ("hostLocker", "मेज़बान लॉकर"),
    ("guestLocker", "अतिथि लॉकर"),
    ("purpose", "उद्देश्य"),
    ("validFrom", "से मान्य"),
    ("lastAccessed", "अंतिम पहुँच"),
    ("Resume", "रिज़्यूमे"),
    ("Certificates", "प्रमाण पत्र"),
    ("References", "संदर्भ"),
    ("Email", "ईमेल"),
    ("Phone", "फ़ोन"),
    ("Address", "पता"),
    ("read", "पढ़ें"),
    ("write", "लिखें"),
    ("share", "साझा करें"),
    ("consentOverview", "सहमति अवलोकन"),
    ("searchAndFilters", "खोज और फ़िल्टर"),
    ("yourConsents", "आपकी सहमतियाँ"),
    // Terminal-only strings
    ("search", "खोजें"),
    ("type", "प्रकार"),
    ("expires", "समाप्ति"),
    ("accesses", "पहुंच"),
    ("more", "और"),
    ("selected", "चयनित"),
    ("exportSelected", "चयनित निर्यात करें"),
    ("revokeSelected", "चयनित रद्द करें"),
    ("ascending", "आरोही"),
    ("descending", "अवरोही"),
    ("noConsentsFound", "कोई सहमति नहीं मिली"),
    ("adjustCriteria", "अपनी खोज या फ़िल्टर मानदंड बदलकर देखें।"),
    ("noMatchingConsents", "आपके मानदंड से मेल खाती कोई सहमति नहीं मिली।"),
    ("riskDistribution", "जोखिम वितरण"),
    ("statusDistribution", "स्थिति वितरण"),
    ("expiringConsents", "समाप्त होने वाली सहमतियाँ"),
    ("accessFrequency", "पहुंच आवृत्ति"),
    ("accessedByUser", "उपयोगकर्ता द्वारा देखा गया"),
    ("consentCreated", "सहमति बनाई गई"),
    ("highRiskConsent", "उच्च जोखिम सहमति"),
    ("nearExpiry", "सहमति समाप्त हो चुकी है या समाप्ति के निकट है"),
    ("sensitiveData", "संवेदनशील डेटा शामिल है"),
    ("highAccessVolume", "अधिक पहुंच दर्ज की गई"),
    ("suggestedActions", "सुझाए गए कदम"),
    ("revoke", "रद्द करें"),
    ("modify", "संशोधित करें"),
    ("investigateAccess", "पहुंच की जाँच करें"),
    ("activityLog", "गतिविधि लॉग"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_language_is_english() {
        assert_eq!(Language::default(), Language::En);
        assert_eq!(Language::default().t("consentManager"), "Consent Manager");
    }

    #[test]
    fn test_hindi_lookup() {
        assert_eq!(Language::Hi.t("consentManager"), "सहमति प्रबंधक");
        assert_eq!(Language::Hi.t("pending"), "लंबित");
    }

    #[test]
    // Unknown keys, such as data values, come back unchanged.
    fn test_missing_key_falls_back_to_key() {
        assert_eq!(Language::En.t("Bank Statements"), "Bank Statements");
        assert_eq!(Language::Hi.t("Zerodha"), "Zerodha");
    }

    #[test]
    fn test_toggle_and_switch_label() {
        assert_eq!(Language::En.toggled(), Language::Hi);
        assert_eq!(Language::Hi.toggled(), Language::En);
        assert_eq!(Language::En.switch_label(), "हिंदी");
        assert_eq!(Language::Hi.switch_label(), "English");
    }

    #[test]
    // Both tables carry exactly the same keys.
    fn test_tables_share_key_set() {
        let en: HashSet<_> = EN_ENTRIES.iter().map(|(k, _)| *k).collect();
        let hi: HashSet<_> = HI_ENTRIES.iter().map(|(k, _)| *k).collect();
        assert_eq!(en, hi);
        assert_eq!(en.len(), EN_ENTRIES.len(), "duplicate key in English table");
        assert_eq!(hi.len(), HI_ENTRIES.len(), "duplicate key in Hindi table");
    }

    #[test]
    fn test_language_serde_codes() {
        assert_eq!(serde_json::to_string(&Language::Hi).unwrap(), "\"hi\"");
        let lang: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(lang, Language::En);
    }
}
