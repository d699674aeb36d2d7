use crate::{board::Position, movegen::legal_moves_into, types::Move};

/// Number of leaf positions reachable in exactly `depth` plies.
pub fn perft(pos: &mut Position, depth: u8) -> u64 {
    let mut buffers = vec![Vec::with_capacity(64); depth as usize];
    count(pos, &mut buffers)
}

/// Leaf counts below each root move, in enumeration order.
pub fn perft_divide(pos: &mut Position, depth: u8) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }
    let mut roots = Vec::with_capacity(64);
    legal_moves_into(pos, &mut roots);
    let mut buffers = vec![Vec::with_capacity(64); depth as usize - 1];
    roots
        .into_iter()
        .map(|mv| {
            let undo = pos.make_move(mv);
            let nodes = count(pos, &mut buffers);
            pos.unmake_move(mv, undo);
            (mv, nodes)
        })
        .collect()
}

// One move buffer per remaining ply avoids allocating inside the recursion.
fn count(pos: &mut Position, buffers: &mut [Vec<Move>]) -> u64 {
    let Some((buf, rest)) = buffers.split_first_mut() else {
        return 1;
    };
    legal_moves_into(pos, buf);
    if rest.is_empty() {
        return buf.len() as u64;
    }

    let mut nodes = 0;
    for i in 0..buf.len() {
        let mv = buf[i];
        let undo = pos.make_move(mv);
        nodes += count(pos, rest);
        pos.unmake_move(mv, undo);
    }
    nodes
}
