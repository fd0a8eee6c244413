use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;

/// Characters left as-is in a URI component: `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const CANADA_TEMPLATE: &str =
    "https://www.jobbank.gc.ca/jobsearch/jobsearch?searchstring={kw}&locationstring=Canada&fws=2&fcp=1";
const EU_TEMPLATE: &str =
    "https://ec.europa.eu/eures/portal/jv-search/search?keyword={kw}&location=&thirdCountry=true";
const AUSTRALIA_TEMPLATE: &str =
    "https://jobsearch.gov.au/Search/Results?keywords={kw}&workRights=OverseasApplicants";
const SINGAPORE_TEMPLATE: &str =
    "https://www.mycareersfuture.gov.sg/search?query={kw}&isForeigner=true";

/// Deep links into government job portals that accept foreign applicants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GovtLinks {
    pub canada: String,
    pub eu: String,
    pub australia: String,
    pub singapore: String,
}

impl GovtLinks {
    pub fn for_keyword(keyword: &str) -> Self {
        let encoded = utf8_percent_encode(keyword, URI_COMPONENT).to_string();
        let fill = |template: &str| template.replace("{kw}", &encoded);

        Self {
            canada: fill(CANADA_TEMPLATE),
            eu: fill(EU_TEMPLATE),
            australia: fill(AUSTRALIA_TEMPLATE),
            singapore: fill(SINGAPORE_TEMPLATE),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("canada", self.canada.as_str()),
            ("eu", self.eu.as_str()),
            ("australia", self.australia.as_str()),
            ("singapore", self.singapore.as_str()),
        ]
        .into_iter()
    }
}
