use rayon::prelude::*;

use crate::{
    compile::plan::RenderPlan,
    composition::model::VisualSource,
    effects::{
        transform::Transform,
        transitions::{LayerPresentation, TransitionState},
    },
    foundation::{
        core::{FrameIndex, FrameRange},
        error::{TubesleuthError, TubesleuthResult},
    },
};

/// Everything visible at one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct EvaluatedFrame {
    /// Evaluated frame index.
    pub frame: FrameIndex,
    /// Active visuals in painter's order.
    pub visuals: Vec<EvaluatedVisual>,
    /// Transitions playing at this frame, in plan order. Usually zero or one; more when a
    /// segment is shorter than the overlap.
    pub transitions: Vec<TransitionState>,
    /// Caption words on screen at this frame.
    pub captions: Vec<EvaluatedCaption>,
}

/// One visual element resolved for a frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct EvaluatedVisual {
    /// Id of the segment the element comes from.
    pub segment_id: String,
    /// Image or animation to draw.
    pub source: VisualSource,
    /// Camera transform from the segment's effect.
    pub transform: Transform,
    /// Opacity and offset from the active transitions; opaque and centred otherwise.
    pub presentation: LayerPresentation,
}

/// One caption word resolved for a frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct EvaluatedCaption {
    /// Display text, punctuation stripped.
    pub text: String,
    /// Reveal scale in roughly `[0, 1]`.
    pub scale: f64,
}

/// Stateless evaluator from render plan to per-frame state.
pub struct Evaluator;

impl Evaluator {
    /// Evaluate one frame of `plan`.
    #[tracing::instrument(skip(plan))]
    pub fn eval_frame(plan: &RenderPlan, frame: FrameIndex) -> TubesleuthResult<EvaluatedFrame> {
        if frame.0 >= plan.duration_frames {
            return Err(TubesleuthError::evaluation(format!(
                "frame {} is out of bounds (duration {})",
                frame.0, plan.duration_frames
            )));
        }
        Ok(eval_frame_unchecked(plan, frame))
    }

    /// Evaluate every frame of `range` in parallel.
    ///
    /// `threads` sizes the worker pool; `None` lets rayon decide. Results come back in
    /// frame order and are identical to evaluating each frame on its own.
    #[tracing::instrument(skip(plan))]
    pub fn eval_range(
        plan: &RenderPlan,
        range: FrameRange,
        threads: Option<usize>,
    ) -> TubesleuthResult<Vec<EvaluatedFrame>> {
        if range.end.0 > plan.duration_frames {
            return Err(TubesleuthError::evaluation(format!(
                "range end {} exceeds duration {}",
                range.end.0, plan.duration_frames
            )));
        }

        let pool = build_thread_pool(threads)?;
        let frames = pool.install(|| {
            (range.start.0..range.end.0)
                .into_par_iter()
                .map(|f| eval_frame_unchecked(plan, FrameIndex(f)))
                .collect::<Vec<_>>()
        });
        Ok(frames)
    }
}

fn eval_frame_unchecked(plan: &RenderPlan, frame: FrameIndex) -> EvaluatedFrame {
    // A layer shorter than the overlap can be entering and exiting at once, so every
    // active transition is applied.
    let active: Vec<(usize, usize, TransitionState)> = plan
        .transitions
        .iter()
        .filter_map(|t| t.state_at(frame).map(|state| (t.from, t.to, state)))
        .collect();

    let visuals = plan
        .visuals
        .iter()
        .enumerate()
        .filter(|(_, v)| v.window.contains(frame))
        .map(|(index, v)| {
            let presentation = active.iter().fold(
                LayerPresentation::OPAQUE,
                |acc, &(from, to, state)| {
                    let acc = if to == index {
                        acc.combine(state.entering)
                    } else {
                        acc
                    };
                    if from == index {
                        acc.combine(state.exiting)
                    } else {
                        acc
                    }
                },
            );
            EvaluatedVisual {
                segment_id: v.segment_id.clone(),
                source: v.source.clone(),
                transform: v.transform_at(frame),
                presentation,
            }
        })
        .collect();

    let captions = plan
        .captions
        .iter()
        .filter(|c| c.window.contains(frame))
        .map(|c| EvaluatedCaption {
            text: c.text.clone(),
            scale: c.scale_at(frame, plan.fps),
        })
        .collect();

    EvaluatedFrame {
        frame,
        visuals,
        transitions: active.into_iter().map(|(_, _, state)| state).collect(),
        captions,
    }
}

fn build_thread_pool(threads: Option<usize>) -> TubesleuthResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(TubesleuthError::validation(
            "eval_range 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| TubesleuthError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
