use jobsponsored_domain::GovtLinks;

#[test]
fn test_links_for_plain_keyword() {
    let links = GovtLinks::for_keyword("nurse");

    assert_eq!(
        links.canada,
        "https://www.jobbank.gc.ca/jobsearch/jobsearch?searchstring=nurse&locationstring=Canada&fws=2&fcp=1"
    );
    assert_eq!(
        links.eu,
        "https://ec.europa.eu/eures/portal/jv-search/search?keyword=nurse&location=&thirdCountry=true"
    );
    assert_eq!(
        links.australia,
        "https://jobsearch.gov.au/Search/Results?keywords=nurse&workRights=OverseasApplicants"
    );
    assert_eq!(
        links.singapore,
        "https://www.mycareersfuture.gov.sg/search?query=nurse&isForeigner=true"
    );
}

#[test]
fn test_keyword_is_percent_encoded_in_every_link() {
    let links = GovtLinks::for_keyword("\"c++ dev\"");

    for (region, url) in links.iter() {
        assert!(
            url.contains("%22c%2B%2B%20dev%22"),
            "{region} link not encoded: {url}"
        );
        assert!(!url.contains("c++"), "{region} link leaks raw keyword");
    }
}

#[test]
fn test_reserved_characters_are_encoded() {
    let links = GovtLinks::for_keyword("a&b=c/d?e#f");
    assert!(links
        .singapore
        .starts_with("https://www.mycareersfuture.gov.sg/search?query=a%26b%3Dc%2Fd%3Fe%23f&"));
}

#[test]
fn test_unicode_keyword_is_utf8_encoded() {
    let links = GovtLinks::for_keyword("café");
    assert!(links.australia.contains("keywords=caf%C3%A9&"));
}

#[test]
fn test_empty_keyword() {
    let links = GovtLinks::for_keyword("");
    assert!(links.eu.contains("keyword=&location="));
}

#[test]
fn test_uri_component_marks_stay_unencoded() {
    let links = GovtLinks::for_keyword("it's (jr)!*~_.-");
    assert!(links
        .canada
        .contains("searchstring=it's%20(jr)!*~_.-&locationstring"));
}
