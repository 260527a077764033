pub const BLOCK_TEMPLATE: &str =
    "<p class=box>hello <b>bold</b> and <i>italic <small>tiny</small></i> text<br></p>";

pub fn make_blocks(blocks: usize) -> String {
    let mut html = String::with_capacity(BLOCK_TEMPLATE.len() * blocks);
    for _ in 0..blocks {
        html.push_str(BLOCK_TEMPLATE);
    }
    html
}
