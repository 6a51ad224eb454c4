#[derive(Clone, Copy, Debug)]
struct Extent {start: usize, len: usize}

/// Files in id order, then the gaps between them.
fn parse(input: &str) -> (Vec<Extent>, Vec<Extent>) {
    let mut files = vec![];
    let mut gaps = vec![];
    let mut start = 0;
    for (i, digit) in input.trim().bytes().enumerate() {
        assert!(digit.is_ascii_digit(), "unexpected disk map byte {}", digit as char);
        let len = (digit - b'0') as usize;
        if i % 2 == 0 {files.push(Extent {start, len})} else {gaps.push(Extent {start, len})}
        start += len;
    }
    (files, gaps)
}

fn compact_blocks(files: &[Extent]) -> usize {
    let size = files.last().map_or(0, |file| file.start + file.len);
    let mut blocks = vec![None; size];
    for (id, file) in files.iter().enumerate() {
        blocks[file.start ..][.. file.len].fill(Some(id));
    }

    let mut block_iter = blocks.iter_mut();
    loop {
        let Some(gap) = block_iter.find(|block| block.is_none()) else {break};
        let Some(file) = block_iter.rfind(|block| block.is_some()) else {break};
        *gap = file.take();
    }

    blocks.iter().enumerate().filter_map(|(pos, id)| id.map(|id| pos * id)).sum()
}

fn compact_files(mut files: Vec<Extent>, mut gaps: Vec<Extent>) -> usize {
    for file in files.iter_mut().rev() {
        let fitting = gaps.iter_mut()
            .take_while(|gap| gap.start < file.start)
            .find(|gap| gap.len >= file.len);
        if let Some(gap) = fitting {
            file.start = gap.start;
            gap.start += file.len;
            gap.len -= file.len;
        }
    }

    files.iter().enumerate().map(|(id, file)|
        id * (file.start .. file.start + file.len).sum::<usize>()
    ).sum()
}

pub fn solve(part: u8, input: &str) -> String {
    let (files, gaps) = parse(input);
    let checksum = if part == 1 {compact_blocks(&files)} else {compact_files(files, gaps)};
    checksum.to_string()
}
