#[cfg(feature = "debugging")]
use std::fmt;

use num_traits::real::Real;

use crate::{Kernel, Orientation, Point, TriangleWinding, TriangulationError, TriangulationOptions, ears::EarTable, idx::Idx, inputs::polygon, ring::{Link, Ring}, simplicity, visibility::Visibility};

#[cfg(feature = "debugging")]
use crate::debug;

/// Where the clipping loop is between two ear removals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ClipPhase {
    /// Looking for the next ear, starting at the cursor
    Scanning,
    /// An ear was just removed; the ear status of its former neighbours is stale
    Clipped {
        prev: Idx<Link>,
        next: Idx<Link>,
    },
    /// Every triangle has been emitted
    Done,
}

pub(crate) struct ClipState<'p, C: Real> {
    points: &'p [Point<C>],
    kernel: Kernel<C>,
    ring: Ring,
    ears: EarTable,
    cursor: Idx<Link>,
    phase: ClipPhase,
    winding: TriangleWinding,
    emitted: usize,
    #[cfg(feature = "debugging")]
    svg_context: Option<debug::svg::SvgContext>,
    #[cfg(feature = "debugging")]
    current_step: u32,
    #[cfg(feature = "debugging")]
    clipped: Vec<[Idx<Link>; 3]>,
}

impl<'p, C: Real> ClipState<'p, C> {
    /// Validates the ring and computes the initial ears.
    ///
    /// `points` must already be checked for length and finiteness.
    pub fn new(points: &'p [Point<C>], options: &TriangulationOptions<C>) -> Result<Self, TriangulationError> {
        let n = points.len();
        let kernel = Kernel::new(options.tolerance);

        // Predicates below assume a counter-clockwise ring, so walk clockwise input backwards
        let ring = match kernel.classify(polygon::area(points) * (C::one() + C::one())) {
            Orientation::CounterClockwise => Ring::new(n),
            Orientation::Clockwise => Ring::reversed(n),
            Orientation::Collinear => return Err(Self::stalled(&kernel, n)),
        };

        if options.check_simplicity && !simplicity::is_simple(points, &kernel) {
            return Err(Self::stalled(&kernel, n));
        }

        let ears = EarTable::init(&ring, &Visibility::new(points, &ring, &kernel));
        let cursor = ring.head();

        #[cfg(feature = "debugging")]
        let svg_context = debug::svg::SvgContext::from_env(points.iter().map(|p| [p.x().to_f32().unwrap_or_default(), p.y().to_f32().unwrap_or_default()]));

        Ok(Self {
            points,
            kernel,
            ring,
            ears,
            cursor,
            phase: ClipPhase::Scanning,
            winding: options.winding,
            emitted: 0,
            #[cfg(feature = "debugging")]
            svg_context,
            #[cfg(feature = "debugging")]
            current_step: 0,
            #[cfg(feature = "debugging")]
            clipped: Vec::with_capacity(n - 2),
        })
    }

    /// Runs the loop to completion, handing each triangle's vertex indices to `emit` in the
    /// requested winding. Returns the number of triangles emitted.
    ///
    /// On error some triangles may already have been emitted.
    pub fn clip_all<F: FnMut(usize, usize, usize)>(mut self, mut emit: F) -> Result<usize, TriangulationError> {
        #[cfg(feature = "debugging")]
        self.output_svg(debug::svg::SvgClipStyle::default(), debug::svg::SvgOutputLevel::MajorSteps);

        loop {
            self.phase = match self.phase {
                ClipPhase::Scanning if self.ring.len() == 3 => {
                    self.clip_last(&mut emit)?;
                    ClipPhase::Done
                }
                ClipPhase::Scanning => {
                    let v = self.find_ear().ok_or_else(|| Self::stalled(&self.kernel, self.ring.len()))?;
                    self.clip(v, &mut emit)
                }
                ClipPhase::Clipped { prev, next } => {
                    let visibility = Visibility::new(self.points, &self.ring, &self.kernel);
                    self.ears.update(prev, &visibility);
                    self.ears.update(next, &visibility);

                    #[cfg(feature = "debugging")]
                    self.output_svg(debug::svg::SvgClipStyle::highlight_vertex(next), debug::svg::SvgOutputLevel::AllSteps);

                    ClipPhase::Scanning
                }
                ClipPhase::Done => break,
            };
        }

        #[cfg(feature = "debugging")]
        self.output_svg(debug::svg::SvgClipStyle::default(), debug::svg::SvgOutputLevel::ResultOnly);

        if self.emitted != self.points.len() - 2 {
            return Err(TriangulationError::internal(format!("Emitted {} triangles for a ring of {} vertices", self.emitted, self.points.len())));
        }
        Ok(self.emitted)
    }

    /// The first ear at or after the cursor, visiting each linked vertex at most once
    fn find_ear(&self) -> Option<Idx<Link>> {
        if self.ears.count() == 0 {
            return None;
        }
        self.ring.iter_from(self.cursor).find(|&v| self.ears[v])
    }

    fn clip<F: FnMut(usize, usize, usize)>(&mut self, v: Idx<Link>, emit: &mut F) -> ClipPhase {
        let prev = self.ring.prev(v);
        let next = self.ring.next(v);
        self.emit(prev, v, next, emit);

        self.ring.remove(v);
        self.ears.clear(v);
        self.cursor = next;

        ClipPhase::Clipped { prev, next }
    }

    fn clip_last<F: FnMut(usize, usize, usize)>(&mut self, emit: &mut F) -> Result<(), TriangulationError> {
        let v = self.ring.head();
        let prev = self.ring.prev(v);
        let next = self.ring.next(v);
        if !self.kernel.left(&self.points[prev.usize()], &self.points[v.usize()], &self.points[next.usize()]) {
            return Err(TriangulationError::DegenerateRing { remaining: 3 });
        }
        self.emit(prev, v, next, emit);
        Ok(())
    }

    fn emit<F: FnMut(usize, usize, usize)>(&mut self, v0: Idx<Link>, v1: Idx<Link>, v2: Idx<Link>, emit: &mut F) {
        let (v0, v1, v2) = self.winding.order(v0, v1, v2);
        emit(v0.usize(), v1.usize(), v2.usize());
        self.emitted += 1;

        #[cfg(feature = "debugging")]
        self.clipped.push([v0, v1, v2]);
    }

    /// The error for a ring with no ear left to clip
    fn stalled(kernel: &Kernel<C>, remaining: usize) -> TriangulationError {
        match kernel.ambiguous_tests() {
            0 => TriangulationError::DegenerateRing { remaining },
            ambiguous_tests => TriangulationError::NumericAmbiguity { remaining, ambiguous_tests },
        }
    }

    #[cfg(feature = "debugging")]
    fn output_svg(&mut self, style: debug::svg::SvgClipStyle, level: debug::svg::SvgOutputLevel) {
        if let Some(svg_context) = &self.svg_context {
            if svg_context.output_level >= level {
                let mut svg = debug::svg::SvgOutput::new(svg_context, style);
                let _ = svg.append_element(self, &());
                let _ = svg.save(format!("{:03}.svg", self.current_step));

                self.current_step += 1;
            }
        }
    }

    #[cfg(feature = "debugging")]
    fn f32_point(&self, v: Idx<Link>) -> (f32, f32) {
        let p = &self.points[v.usize()];
        (p.x().to_f32().unwrap_or_default(), p.y().to_f32().unwrap_or_default())
    }
}

#[cfg(feature = "debugging")]
impl<'p, C: Real> debug::svg::SvgElement<debug::svg::SvgClipStyle, ()> for ClipState<'p, C> {
    fn write_svg<'b>(&self, svg_output: &mut debug::svg::SvgOutput<'b, debug::svg::SvgClipStyle>, _state: &()) -> fmt::Result {
        use svg_fmt::*;
        use fmt::Write;

        for t in &self.clipped {
            let vs: Vec<[f32; 2]> = t.iter().map(|&v| {
                let (x, y) = self.f32_point(v);
                [x, y]
            }).collect();
            writeln!(svg_output, "{}",
                polygon(&vs)
                    .fill(Fill::Color(rgb(200, 220, 255)))
                    .stroke(Stroke::Color(blue(), svg_output.context.percent(0.15)))
            )?;
        }

        let ring: Vec<[f32; 2]> = self.ring.iter().map(|v| {
            let (x, y) = self.f32_point(v);
            [x, y]
        }).collect();
        if ring.len() > 2 {
            writeln!(svg_output, "{}",
                polygon(&ring)
                    .fill(Fill::None)
                    .stroke(Stroke::Color(rgb(255, 0, 255), svg_output.context.percent(0.3)))
            )?;
        }

        for v in self.ring.iter() {
            svg_output.append_element(&v, self)?;
        }
        Ok(())
    }
}

#[cfg(feature = "debugging")]
impl<'p, C: Real> debug::svg::SvgElement<debug::svg::SvgClipStyle, ClipState<'p, C>> for Idx<Link> {
    fn write_svg<'b>(&self, svg_output: &mut debug::svg::SvgOutput<'b, debug::svg::SvgClipStyle>, state: &ClipState<'p, C>) -> fmt::Result {
        use svg_fmt::*;
        use fmt::Write;

        let (x, y) = state.f32_point(*self);
        let color = match svg_output.style.get_v_style(*self, state.ears[*self]) {
            debug::svg::SvgElementStyle::Standard => green(),
            debug::svg::SvgElementStyle::Ear => red(),
            debug::svg::SvgElementStyle::Highlight => rgb(255, 126, 0),
        };
        let r = svg_output.context.percent(0.5);
        writeln!(svg_output, "{}",
            debug::svg::circle(x, y, r)
                .fill(Fill::Color(color))
        )?;

        if svg_output.context.show_labels {
            let gap = svg_output.context.percent(1.0);
            writeln!(svg_output, "{}",
                text(x - gap, y, self.to_string())
                    .color(black())
                    .align(Align::Right)
                    .size(svg_output.context.percent(1.0))
            )?;
        }
        Ok(())
    }
}
