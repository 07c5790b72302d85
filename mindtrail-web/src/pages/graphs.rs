use mindtrail_game::{
    CompletionOutcome, GraphAlgorithm, GraphFrame, GraphSpec, Selection, bfs_trace, dijkstra_trace,
    narrate_completion, narrate_graph_frame,
};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct GraphsPageProps {
    pub selection: Selection,
    pub on_exit: Callback<()>,
}

fn algorithm_for(subtopic: &str) -> GraphAlgorithm {
    match subtopic {
        "dijkstra" => GraphAlgorithm::Dijkstra,
        _ => GraphAlgorithm::Bfs,
    }
}

/// Graph lab: settle the demo network one node at a time.
#[function_component(GraphsPage)]
pub fn graphs_page(props: &GraphsPageProps) -> Html {
    let algorithm = algorithm_for(&props.selection.subtopic);
    let graph = use_memo((), |()| GraphSpec::sample());
    let frames = {
        let graph = graph.clone();
        use_memo(algorithm, move |algorithm| match algorithm {
            GraphAlgorithm::Bfs => bfs_trace(&graph, 0),
            GraphAlgorithm::Dijkstra => dijkstra_trace(&graph, 0),
        })
    };
    let position = use_state(|| 0_usize);
    let outcome = use_state(|| None::<CompletionOutcome>);

    {
        let selection = props.selection.clone();
        use_effect_with((), move |()| {
            crate::storage::tracker().record_game_start(&selection, &crate::dom::now_iso());
            crate::narrator::speak("Time to explore the graph, one node at a time.");
            || {}
        });
    }

    let total = frames.len();
    let finish = {
        let outcome = outcome.clone();
        let selection = props.selection.clone();
        move |watched: usize| {
            if outcome.is_some() {
                return;
            }
            let watched = u32::try_from(watched).unwrap_or(u32::MAX);
            let total = u32::try_from(total).unwrap_or(u32::MAX);
            let recorded = crate::storage::tracker().record_game_complete(
                &selection,
                watched,
                total,
                &crate::dom::now_iso(),
            );
            if let Some(recorded) = &recorded {
                crate::narrator::speak(&narrate_completion(recorded));
            }
            outcome.set(recorded);
        }
    };

    let on_step = {
        let position = position.clone();
        let graph = graph.clone();
        let frames = frames.clone();
        let finish = finish.clone();
        Callback::from(move |_| {
            let next = (*position + 1).min(frames.len().saturating_sub(1));
            position.set(next);
            if let Some(frame) = frames.get(next) {
                crate::narrator::speak(&narrate_graph_frame(&graph, frame));
            }
            if next + 1 == frames.len() {
                finish(frames.len());
            }
        })
    };
    let on_skip = {
        let position = position.clone();
        let frames = frames.clone();
        let finish = finish.clone();
        Callback::from(move |_| {
            let watched = *position + 1;
            position.set(frames.len().saturating_sub(1));
            finish(watched);
        })
    };
    let on_exit = {
        let on_exit = props.on_exit.clone();
        Callback::from(move |_| on_exit.emit(()))
    };

    let frame = frames.get(*position);

    html! {
        <div class="page page-graphs" data-testid="graphs-screen">
            <h2>{ format!("Graph Lab: {}", algorithm.label()) }</h2>
            { frame.map_or_else(Html::default, |frame| render_frame(&graph, frame)) }
            <p data-testid="graph-position">
                { format!("Step {} of {}", *position + 1, total) }
            </p>
            {
                if let Some(recorded) = outcome.as_ref() {
                    html! {
                        <div class="graph-result" data-testid="graph-result">
                            <p>{ format!("XP earned: {}", recorded.xp_gained) }</p>
                            { recorded.first_completion.then(|| html! {
                                <p>{ "New subtopic completed!" }</p>
                            }) }
                            <button onclick={on_exit}>{ "Back to games" }</button>
                        </div>
                    }
                } else {
                    html! {
                        <div class="graph-controls">
                            <button onclick={on_step} data-testid="graph-step">{ "Step" }</button>
                            <button onclick={on_skip} data-testid="graph-skip">{ "Skip to end" }</button>
                            <button onclick={on_exit}>{ "Quit" }</button>
                        </div>
                    }
                }
            }
        </div>
    }
}

fn render_frame(graph: &GraphSpec, frame: &GraphFrame) -> Html {
    let nodes = graph.nodes.iter().enumerate().map(|(idx, name)| {
        let class = if idx == frame.current {
            "graph-node graph-node-current"
        } else if frame.visited.contains(&idx) {
            "graph-node graph-node-visited"
        } else if frame.frontier.contains(&idx) {
            "graph-node graph-node-frontier"
        } else {
            "graph-node"
        };
        let distance = frame.distances[idx].map_or_else(|| "?".to_string(), |d| d.to_string());
        html! {
            <div {class} data-testid={format!("node-{name}")}>
                <span class="node-name">{ name }</span>
                <span class="node-distance">{ distance }</span>
            </div>
        }
    });
    html! {
        <div class="graph-frame">
            <p class="graph-narration">{ narrate_graph_frame(graph, frame) }</p>
            <div class="graph-nodes">{ for nodes }</div>
        </div>
    }
}
