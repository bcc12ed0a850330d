#[derive(Properties, PartialEq)]
struct CalendarWorkspaceProps {
  view:            CalendarViewMode,
  focus:           NaiveDate,
  selected:        NaiveDate,
  today:           NaiveDate,
  week_start:      Weekday,
  now_minute:      u32,
  entries:         Vec<DayEvent>,
  loading:         bool,
  menu_open:       Option<Uuid>,
  track_ref:       NodeRef,
  modal:           Option<EventModalState>,
  modal_busy:      bool,
  on_prev:         Callback<MouseEvent>,
  on_today:        Callback<MouseEvent>,
  on_next:         Callback<MouseEvent>,
  on_set_view:
    Callback<CalendarViewMode>,
  on_open_add:     Callback<MouseEvent>,
  on_select_date:
    Callback<NaiveDate>,
  on_track_click:  Callback<(
    NaiveDate,
    MouseEvent
  )>,
  on_event_menu:   Callback<Uuid>,
  on_event_edit:   Callback<Uuid>,
  on_event_delete: Callback<Uuid>,
  on_modal_title:
    Callback<web_sys::InputEvent>,
  on_modal_start:
    Callback<web_sys::InputEvent>,
  on_modal_end:
    Callback<web_sys::InputEvent>,
  on_modal_color:  Callback<String>,
  on_modal_save:   Callback<MouseEvent>,
  on_modal_cancel: Callback<MouseEvent>
}

#[function_component(
  CalendarWorkspace
)]
fn calendar_workspace(
  props: &CalendarWorkspaceProps
) -> Html {
  let title = calendar_title(
    props.focus,
    props.view,
    props.week_start
  );

  html! {
      <div class="panel calendar-workspace">
          <div class="calendar-toolbar">
              <div class="calendar-title">{ title }</div>
              <CalendarNavActions
                  on_prev={props.on_prev.clone()}
                  on_today={props.on_today.clone()}
                  on_next={props.on_next.clone()}
              />
              <CalendarViewSwitch
                  current_view={props.view}
                  on_set_view={props.on_set_view.clone()}
              />
              <button class="btn primary" onclick={props.on_open_add.clone()}>{ "Add Event" }</button>
          </div>
          {
              if props.loading {
                  html! { <div class="calendar-loading">{ "Loading events..." }</div> }
              } else {
                  html! {}
              }
          }
          {
              render_calendar_view(
                  props.view,
                  props.focus,
                  props.selected,
                  props.today,
                  props.week_start,
                  props.now_minute,
                  &props.entries,
                  &props.track_ref,
                  props.menu_open,
                  props.on_select_date.clone(),
                  props.on_track_click.clone(),
                  props.on_event_menu.clone(),
                  props.on_event_edit.clone(),
                  props.on_event_delete.clone()
              )
          }
          {
              if props.view == CalendarViewMode::Month {
                  render_selected_day_panel(
                      props.selected,
                      &props.entries,
                      props.on_event_edit.clone(),
                      props.on_event_delete.clone()
                  )
              } else {
                  html! {}
              }
          }
          {
              if let Some(modal) = props.modal.as_ref() {
                  render_event_modal(
                      modal,
                      props.modal_busy,
                      props.on_modal_title.clone(),
                      props.on_modal_start.clone(),
                      props.on_modal_end.clone(),
                      props.on_modal_color.clone(),
                      props.on_modal_save.clone(),
                      props.on_modal_cancel.clone()
                  )
              } else {
                  html! {}
              }
          }
      </div>
  }
}
