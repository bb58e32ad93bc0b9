use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub title: AttrValue,
    pub on_close: Callback<MouseEvent>,
    pub children: Children,
}

/// Full-screen overlay with a scrollable panel. Clicking the overlay or the
/// close control dismisses it; clicks inside the panel do not propagate to
/// the overlay.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let swallow = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-overlay" onclick={props.on_close.clone()}>
            <div class="modal-panel" onclick={swallow}>
                <div class="modal-header">
                    <h2>{ props.title.to_string() }</h2>
                    <button class="modal-close" onclick={props.on_close.clone()}>{"✕"}</button>
                </div>
                <div class="modal-body">
                    { for props.children.iter() }
                </div>
            </div>

            <style>
                {r#"
                .modal-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 50;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                    background: rgba(0, 0, 0, 0.7);
                    backdrop-filter: blur(4px);
                }

                .modal-panel {
                    background: #0F0A1F;
                    border: 2px solid rgba(127, 32, 255, 0.3);
                    border-radius: 16px;
                    max-width: 900px;
                    width: 100%;
                    max-height: 90vh;
                    overflow-y: auto;
                }

                .modal-header {
                    position: sticky;
                    top: 0;
                    background: #0F0A1F;
                    border-bottom: 1px solid rgba(127, 32, 255, 0.2);
                    padding: 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .modal-header h2 {
                    margin: 0;
                    font-size: 1.5rem;
                    color: #fff;
                }

                .modal-close {
                    background: none;
                    border: none;
                    color: #9CA3AF;
                    font-size: 1.25rem;
                    cursor: pointer;
                    transition: color 0.3s ease;
                }

                .modal-close:hover {
                    color: #fff;
                }

                .modal-body {
                    padding: 1.5rem;
                    color: #D1D5DB;
                }

                .modal-body h3 {
                    color: #fff;
                    font-size: 1.2rem;
                    margin: 1.5rem 0 0.75rem;
                }

                .modal-body h4 {
                    color: #fff;
                    font-size: 1.05rem;
                    margin: 1rem 0 0.5rem;
                }

                .modal-body p {
                    line-height: 1.6;
                    margin: 0 0 1rem;
                }

                .modal-body ul {
                    margin: 0.5rem 0 1rem;
                    padding-left: 1.5rem;
                }

                .modal-body li {
                    line-height: 1.6;
                    margin-bottom: 0.25rem;
                }

                .modal-updated {
                    color: #9CA3AF;
                    font-size: 0.9rem;
                }
                "#}
            </style>
        </div>
    }
}
