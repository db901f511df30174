//! End-to-end deduplication tests: parse, dedupe, print.

use css_dedupe::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

fn run(css: &str, options: DedupeOptions) -> String {
    init_tracing();
    let sheet = Stylesheet::from_css(css).expect("fixture should parse");
    deduplicate(sheet, &options).to_string()
}

fn dedupe(css: &str) -> String {
    run(css, DedupeOptions::default())
}

fn dedupe_reverse(css: &str) -> String {
    run(css, DedupeOptions::new().reverse_removal(true))
}

#[test]
fn test_duplicate_rules() {
    assert_eq!(dedupe("h1{font-weight:bold}h1{font-weight:bold}"), "h1{font-weight:bold}");
    assert_eq!(
        dedupe("h1{color:#000}h2{color:#fff}h1{color:#000}"),
        "h2{color:#fff}h1{color:#000}"
    );
}

#[test]
fn test_duplicate_rules_with_whitespace() {
    assert_eq!(dedupe("h1 { font-weight: bold }\nh1{font-weight:bold}"), "h1{font-weight:bold}");
}

#[test]
fn test_duplicate_declarations() {
    assert_eq!(dedupe("h1{font-weight:bold;font-weight:bold}"), "h1{font-weight:bold}");
}

#[test]
fn test_duplicate_declarations_with_comments() {
    assert_eq!(
        dedupe("h1{/*test*/font-weight:bold}h1{/*test*/font-weight:bold}"),
        "h1{/*test*/font-weight:bold}"
    );
}

#[test]
fn test_duplicate_statement_at_rules() {
    assert_eq!(dedupe("@charset \"utf-8\";@charset \"utf-8\";"), "@charset \"utf-8\";");
    assert_eq!(
        dedupe("@charset \"utf-8\";@charset \"hello!\";@charset \"utf-8\";"),
        "@charset \"hello!\";@charset \"utf-8\";"
    );
}

#[test]
fn test_duplicates_inside_media() {
    assert_eq!(
        dedupe("@media print{h1{display:block}h1{display:block}}"),
        "@media print{h1{display:block}}"
    );
}

#[test]
fn test_duplicate_media() {
    assert_eq!(
        dedupe("@media print{h1{display:block}}@media print{h1{display:block}}"),
        "@media print{h1{display:block}}"
    );
}

#[test]
fn test_vendor_keyframes_untouched() {
    let fixtures = [
        concat!(
            "@-webkit-keyframes flash{0%,50%,100%{opacity:1}25%,75%{opacity:0}}",
            "@keyframes flash{0%,50%,100%{opacity:1}25%,75%{opacity:0}}",
        ),
        concat!(
            "@-webkit-keyframes test{0%{color:#000}to{color:#fff}}",
            "@keyframes test{0%{color:#000}to{color:#fff}}",
        ),
        concat!(
            "@-webkit-keyframes slideInDown{",
            "0%{-webkit-transform:translateY(-100%);transform:translateY(-100%);",
            "visibility:visible}",
            "to{-webkit-transform:translateY(0);transform:translateY(0)}}",
            "@keyframes slideInDown{",
            "0%{-webkit-transform:translateY(-100%);transform:translateY(-100%);",
            "visibility:visible}",
            "to{-webkit-transform:translateY(0);transform:translateY(0)}}",
        ),
    ];

    for css in fixtures {
        assert_eq!(dedupe(css), css);
    }
}

#[test]
fn test_declarations_before_rules() {
    assert_eq!(
        dedupe("h1{font-weight:bold;font-weight:bold}h1{font-weight:bold}"),
        "h1{font-weight:bold}"
    );
}

#[test]
fn test_comments_not_deduplicated() {
    let css = "h1{color:#000}/*test*/h2{color:#fff}/*test*/";
    assert_eq!(dedupe(css), css);
}

#[test]
fn test_different_selectors_untouched() {
    let css = "h1{font-weight:bold}h2{font-weight:bold}";
    assert_eq!(dedupe(css), css);
}

#[test]
fn test_no_removal_across_contexts() {
    let css = "h1{display:block}@media print{h1{display:block}}";
    assert_eq!(dedupe(css), css);
}

#[test]
fn test_selectors_not_normalized() {
    let css = "h1,h2{font-weight:bold}h2,h1{font-weight:bold}";
    assert_eq!(dedupe(css), css);
}

#[test]
fn test_declarations_not_normalized() {
    let css = "h1{margin:10px 0 10px 0;margin:10px 0}";
    assert_eq!(dedupe(css), css);
}

#[test]
fn test_duplicate_rules_and_declarations() {
    assert_eq!(
        dedupe("h1{color:#000}h2{color:#fff}h1{color:#000;color:#000}"),
        "h2{color:#fff}h1{color:#000}"
    );
}

#[test]
fn test_differently_ordered_duplicates() {
    assert_eq!(
        dedupe("h1{color:black;font-size:12px}h1{font-size:12px;color:black}"),
        "h1{font-size:12px;color:black}"
    );
}

#[test]
fn test_partial_duplicates() {
    assert_eq!(
        dedupe("h1{color:red;background:blue}h1{color:red}"),
        "h1{background:blue}h1{color:red}"
    );
}

#[test]
fn test_browser_hacks_preserved() {
    let css = "h1{_color:white;color:white}";
    assert_eq!(dedupe(css), css);

    let css = "@media \\0 all{}@media all{}";
    assert_eq!(dedupe(css), css);
}

#[test]
fn test_reverse_duplicate_rules_and_declarations() {
    assert_eq!(
        dedupe_reverse("h1{color:#000}h2{color:#fff}h1{color:#000;color:#000}"),
        "h1{color:#000}h2{color:#fff}"
    );
}

#[test]
fn test_reverse_partial_duplicates() {
    assert_eq!(
        dedupe_reverse("h1{color:red;background:blue}h1{color:red}"),
        "h1{color:red;background:blue}"
    );
}

#[test]
fn test_important_is_distinct() {
    let css = "h1{color:red!important;color:red}";
    assert_eq!(dedupe(css), css);

    assert_eq!(
        dedupe("h1{color:red !important}h1{color:red!important}"),
        "h1{color:red!important}"
    );
}

#[test]
fn test_font_face_declarations() {
    assert_eq!(
        dedupe("@font-face{font-family:Foo;src:url(foo.woff);src:url(foo.woff)}"),
        "@font-face{font-family:Foo;src:url(foo.woff)}"
    );
}

#[test]
fn test_direction_symmetry() {
    let css = "a{color:red}b{color:blue}a{color:red}";

    assert_eq!(dedupe(css), "b{color:blue}a{color:red}");
    assert_eq!(dedupe_reverse(css), "a{color:red}b{color:blue}");
}

#[test]
fn test_idempotence() {
    let fixtures = [
        "h1{color:#000}h2{color:#fff}h1{color:#000;color:#000}",
        "@media print{h1{display:block}h1{display:block}}@media print{h1{display:block}}",
        "h1{color:red;background:blue}h1{color:red}/*x*/h1{background:blue}",
        "@charset \"utf-8\";@charset \"hello!\";@charset \"utf-8\";",
    ];

    for options in [DedupeOptions::default(), DedupeOptions::new().reverse_removal(true)] {
        for css in fixtures {
            let once = deduplicate(Stylesheet::from_css(css).unwrap(), &options);
            let (twice, report) = deduplicate_with_report(once.clone(), &options);

            assert_eq!(twice, once, "second pass changed {}", css);
            assert!(report.is_empty());
        }
    }
}

#[test]
fn test_comment_inertness() {
    let plain = concat!(
        "h1{color:red}h2{color:blue}h1{color:red}",
        "@media print{a{b:c}}@media print{a{b:c}}",
    );
    let commented = concat!(
        "h1{color:red}/*1*/h2{color:blue}/*2*/h1{color:red}/*3*/",
        "@media print{/*4*/a{b:c}}@media print{a{b:c}}",
    );

    for options in [DedupeOptions::default(), DedupeOptions::new().reverse_removal(true)] {
        let without = deduplicate(Stylesheet::from_css(plain).unwrap(), &options);
        let with = deduplicate(Stylesheet::from_css(commented).unwrap(), &options);

        let strip = |sheet: &Stylesheet| -> Vec<String> {
            sheet
                .iter()
                .filter(|node| !node.is_comment())
                .map(|node| node.to_string().replace("/*4*/", ""))
                .collect()
        };
        assert_eq!(strip(&without), strip(&with));

        let comments = with.iter().filter(|node| node.is_comment()).count();
        assert_eq!(comments, 3);
    }
}

#[test]
fn test_comments_inside_declarations() {
    let css = "h1{/*a*/color:red/*b*/}h1{color:red}";

    assert_eq!(dedupe(css), "h1{color:red}");
    assert_eq!(dedupe_reverse(css), "h1{/*a*/color:red/*b*/}");

    assert_eq!(
        dedupe("h1{margin:0/*x*/;margin: 0 !important;margin:0}"),
        "h1{margin:0!important;margin:0}"
    );
}

#[test]
fn test_print_parse_round_trip() {
    let fixtures = [
        "@page{margin:0;@top-left{content:x}}",
        "a:b;h1{c:d}",
        "@media print{color:red;h1{x:y}}",
        "h1{color:red/*end*/}/*x*/@charset \"utf-8\";",
        "@media screen{@supports (display:grid){a{b:c;d:e!important}}}",
        "@font-face{font-family:Foo;src:url(foo.woff)}h1{color:red}",
    ];

    for css in fixtures {
        let sheet = Stylesheet::from_css(css).expect("fixture should parse");
        let printed = sheet.to_string();
        assert_eq!(printed, css);

        let reparsed = Stylesheet::from_css(&printed).expect("printed text should parse");
        assert_eq!(reparsed, sheet, "round trip changed {}", css);
        assert_eq!(reparsed.to_string(), printed);
    }
}

#[test]
fn test_in_place_report() {
    let mut sheet = Stylesheet::from_css("h1{color:red;background:blue}h1{color:red}").unwrap();

    let report = sheet.dedupe(&DedupeOptions::new().reverse_removal(true));

    assert_eq!(report.declarations_removed, 1);
    assert_eq!(report.nodes_removed, 1);
    assert_eq!(sheet.len(), 1);
}
