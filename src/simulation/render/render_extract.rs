use super::Solver;

pub(super) fn extract_positions(solver: &mut Solver) -> &[f32] {
    let buffer = &mut solver.render.positions;
    buffer.clear();
    buffer.reserve(solver.particles.len() * 2);
    for p in &solver.particles {
        buffer.push(p.position.x);
        buffer.push(p.position.y);
    }
    buffer
}

pub(super) fn extract_colors(solver: &mut Solver) -> &[u32] {
    let buffer = &mut solver.render.colors;
    buffer.clear();
    buffer.extend(solver.particles.iter().map(|p| p.color));
    buffer
}
