use crate::style::{Slant, Weight};
use crate::{
    DisplayItem, DisplayList, FontError, FontKey, LayoutOptions, TextMetrics, layout,
    layout_with_defaults,
};

// Every char is half the font size wide; ascent/descent split the size 3:1.
struct TestMetrics;

impl TextMetrics for TestMetrics {
    type Font = FontKey;

    fn resolve(&self, key: FontKey) -> Result<FontKey, FontError> {
        if key.size <= 0 {
            return Err(FontError::new(key, "size out of range"));
        }
        Ok(key)
    }

    fn measure(&self, font: &FontKey, text: &str) -> f32 {
        text.chars().count() as f32 * font.size as f32 * 0.5
    }

    fn ascent(&self, font: &FontKey) -> f32 {
        font.size as f32 * 0.75
    }

    fn descent(&self, font: &FontKey) -> f32 {
        font.size as f32 * 0.25
    }
}

fn assert_approx_eq(got: f32, want: f32) {
    let eps = 0.01;
    assert!(
        (got - want).abs() <= eps,
        "expected {want:.4}, got {got:.4}"
    );
}

fn run(input: &str) -> DisplayList<FontKey> {
    run_with(input, LayoutOptions::defaults())
}

fn run_with(input: &str, options: LayoutOptions) -> DisplayList<FontKey> {
    let doc = html::parse(input);
    layout(&doc, &TestMetrics, &options).expect("layout succeeds")
}

fn find<'a>(list: &'a DisplayList<FontKey>, text: &str) -> &'a DisplayItem<FontKey> {
    list.iter()
        .find(|item| item.text == text)
        .unwrap_or_else(|| panic!("no item {text:?} in {:?}", list.items()))
}

#[test]
fn empty_document_has_no_items() {
    let list = run("");
    assert!(list.is_empty());
    assert_approx_eq(list.content_height(), LayoutOptions::defaults().vstep);
    assert!(run(" \n\t ").is_empty());
}

#[test]
fn bold_then_italic_share_a_line() {
    let list = run("<b>Hi</b> <i>there</i>");
    assert_eq!(list.len(), 2);

    let hi = &list.items()[0];
    let there = &list.items()[1];
    assert_eq!(hi.text, "Hi");
    assert_eq!(hi.font.weight, Weight::Bold);
    assert_eq!(hi.font.slant, Slant::Roman);
    assert_eq!(there.text, "there");
    assert_eq!(there.font.slant, Slant::Italic);
    assert_eq!(there.font.weight, Weight::Normal);

    // 16px: 8px per char, 8px space.
    assert_approx_eq(hi.x, 13.0);
    assert_approx_eq(there.x, 13.0 + 16.0 + 8.0);
    // baseline = 18 + 1.25 * 12; y = baseline - 12
    assert_approx_eq(hi.y, 21.0);
    assert_approx_eq(there.y, hi.y);
}

#[test]
fn style_reverts_after_closing_tag() {
    let list = run("<b>bold</b>after");
    assert_eq!(find(&list, "bold").font.weight, Weight::Bold);
    assert_eq!(find(&list, "after").font.weight, Weight::Normal);
}

#[test]
fn size_tags_are_additive() {
    let list = run("<big>a<small>b</small>c</big>d");
    assert_eq!(find(&list, "a").font.size, 20);
    assert_eq!(find(&list, "b").font.size, 18);
    assert_eq!(find(&list, "c").font.size, 20);
    assert_eq!(find(&list, "d").font.size, 16);
}

#[test]
fn nested_italic_close_resets_to_roman() {
    let list = run("<i><i>a</i>b</i>");
    assert_eq!(find(&list, "a").font.slant, Slant::Italic);
    assert_eq!(find(&list, "b").font.slant, Slant::Roman);
}

#[test]
fn wraps_when_word_would_pass_right_edge() {
    // right edge = 100 - 13 = 87; each word is 32px plus an 8px space.
    let list = run_with("aaaa bbbb cccc", LayoutOptions::defaults().with_width(100.0));
    let a = find(&list, "aaaa");
    let b = find(&list, "bbbb");
    let c = find(&list, "cccc");
    assert_approx_eq(a.x, 13.0);
    assert_approx_eq(b.x, 53.0);
    assert_approx_eq(b.y, a.y);
    assert_approx_eq(c.x, 13.0);
    assert!(c.y > b.y);
    // line 1 ends at 33 + 1.25 * 4 = 38; line 2 baseline 38 + 15.
    assert_approx_eq(c.y, 53.0 - 12.0);
}

#[test]
fn reaching_the_right_edge_exactly_wraps() {
    // right edge = 98 - 13 = 85 = 53 + 32.
    let list = run_with("aaaa bbbb", LayoutOptions::defaults().with_width(98.0));
    let b = find(&list, "bbbb");
    assert_approx_eq(b.x, 13.0);
    assert!(b.y > find(&list, "aaaa").y);
}

#[test]
fn overlong_word_is_placed_and_pushes_the_next() {
    let long = "w".repeat(20);
    let list = run_with(&format!("{long} x"), LayoutOptions::defaults().with_width(100.0));
    let first = find(&list, &long);
    let next = find(&list, "x");
    assert_approx_eq(first.x, 13.0);
    assert_approx_eq(first.y, 21.0);
    assert_approx_eq(next.x, 13.0);
    assert!(next.y > first.y);
}

#[test]
fn baseline_is_shared_across_mixed_sizes() {
    let list = run("<big>Big</big> small <small>tiny</small>");
    assert_eq!(list.len(), 3);
    // max ascent is the 20px font: 15px.
    let baseline = 18.0 + 1.25 * 15.0;
    for item in &list {
        assert_approx_eq(item.y + TestMetrics.ascent(&item.font), baseline);
    }
    assert!(find(&list, "Big").y < find(&list, "small").y);
}

#[test]
fn space_width_uses_the_word_font() {
    let list = run("<big>A</big>b");
    // A at 20px: 10px wide plus a 10px space.
    assert_approx_eq(find(&list, "b").x, 13.0 + 10.0 + 10.0);
}

#[test]
fn br_starts_a_new_line() {
    let list = run("one<br>two");
    let one = find(&list, "one");
    let two = find(&list, "two");
    assert_approx_eq(two.x, 13.0);
    assert!(two.y > one.y);
}

#[test]
fn paragraphs_add_vertical_spacing() {
    let list = run("<p>a</p><p>b</p>");
    let a = find(&list, "a");
    let b = find(&list, "b");
    assert_approx_eq(a.y, 21.0);
    // after a: 38, plus vstep 56; b baseline 56 + 15 = 71.
    assert_approx_eq(b.y, 71.0 - 12.0);
    assert_approx_eq(list.content_height(), 71.0 + 5.0 + 18.0);
}

#[test]
fn empty_paragraph_still_advances() {
    let list = run("<p></p>");
    assert!(list.is_empty());
    assert_approx_eq(list.content_height(), 36.0);
}

#[test]
fn items_are_in_reading_order() {
    let list = run_with(
        "one two three four five six seven eight",
        LayoutOptions::defaults().with_width(120.0),
    );
    for pair in list.items().windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        assert!(next.y > prev.y || (next.y == prev.y && next.x > prev.x));
    }
}

#[test]
fn title_text_is_laid_out_too() {
    let list = run("<title>T</title><p>body</p>");
    assert_eq!(list.items()[0].text, "T");
    assert_eq!(list.items()[1].text, "body");
}

#[test]
fn font_failure_is_propagated() {
    let input = format!("{}x", "<small>".repeat(8));
    let doc = html::parse(&input);
    let err = layout(&doc, &TestMetrics, &LayoutOptions::defaults()).unwrap_err();
    assert_eq!(err.key.size, 0);
}

#[test]
fn layout_is_repeatable() {
    let doc = html::parse("<p>Some <b>text</b> <i>here</i></p>");
    let first = layout(&doc, &TestMetrics, &LayoutOptions::defaults()).unwrap();
    let second = layout(&doc, &TestMetrics, &LayoutOptions::defaults()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn deep_nesting_lays_out_without_recursion() {
    let input = format!("{}deep", "<b>".repeat(10_000));
    let list = run(&input);
    assert_eq!(list.len(), 1);
    assert_eq!(list.items()[0].font.weight, Weight::Bold);
}

#[test]
fn defaults_entry_point_matches_explicit_defaults() {
    let doc = html::parse("<p>one <b>two</b></p><p>three</p>");
    let implicit = layout_with_defaults(&doc, &TestMetrics).expect("layout succeeds");
    let explicit = layout(&doc, &TestMetrics, &LayoutOptions::defaults()).expect("layout succeeds");
    assert_eq!(implicit, explicit);
}

#[test]
fn first_screen_is_bounded_by_viewport_height() {
    let options = LayoutOptions::defaults();
    let input = "<p>line</p>".repeat(100);
    let list = run_with(&input, options);
    assert!(list.content_height() > options.height);
    let shown: Vec<_> = list.visible(0.0, options.height, options.vstep).collect();
    assert!(!shown.is_empty());
    assert!(shown.len() < list.len());
    assert!(shown.iter().all(|item| item.y <= options.height));
}
