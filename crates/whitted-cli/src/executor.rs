use std::{
    io::Write,
    sync::mpsc::{channel, Receiver, SendError, Sender},
};

use rayon::iter::{IntoParallelIterator, ParallelIterator};
use whitted::{color::Rgb, renderer::Renderer};

use crate::progress::Progress;

enum Message {
    Line(LineMsg),
    Stop,
}

/// A fully traced row of the image
pub struct LineMsg {
    pub row: u32,
    pub data: Vec<Rgb>,
}

/// Final image, rows stored top-down
pub struct OutputBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Rgb>,
}

impl OutputBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::default(); width as usize * height as usize],
        }
    }

    pub fn write_line(&mut self, msg: &LineMsg) {
        let start = msg.row as usize * self.width as usize;
        self.pixels[start..start + msg.data.len()].copy_from_slice(&msg.data);
    }
}

pub struct Executor<'a> {
    pub renderer: Renderer<'a>,
}

impl<'a> Executor<'a> {
    pub fn run_multithreaded(&self) -> OutputBuffer {
        self.run(|tx| {
            (0..self.renderer.height)
                .into_par_iter()
                .map(|row| self.line_worker(row))
                .try_for_each_init(|| tx.clone(), |tx, msg| tx.send(Message::Line(msg)))
        })
    }

    pub fn run_monothreaded(&self) -> OutputBuffer {
        self.run(|tx| {
            (0..self.renderer.height)
                .map(|row| self.line_worker(row))
                .try_for_each(|msg| tx.send(Message::Line(msg)))
        })
    }

    /// Collects the lines sent by `dispatch` into an [OutputBuffer], reporting progress along the way
    fn run<F>(&self, dispatch: F) -> OutputBuffer
    where
        F: FnOnce(&Sender<Message>) -> Result<(), SendError<Message>> + Send,
    {
        let mut output_buffer = OutputBuffer::new(self.renderer.width, self.renderer.height);
        let progress = Progress::new(self.renderer.height as usize);

        let generation_result = rayon::scope(|s| {
            let (tx, rx) = channel();

            log::info!("generating image...");
            s.spawn(|_| {
                let rx: Receiver<Message> = rx; // Force move without moving anything else
                let mut last_progress_update = std::time::Instant::now();
                for msg in rx.iter() {
                    match msg {
                        Message::Line(msg) => {
                            output_buffer.write_line(&msg);
                            progress.add(1);
                        }
                        Message::Stop => break,
                    }

                    if last_progress_update.elapsed() >= std::time::Duration::from_millis(300) {
                        print!("\r{progress}");
                        let _ = std::io::stdout().flush();
                        last_progress_update = std::time::Instant::now();
                    }
                }
                println!("\r{progress}");
            });

            dispatch(&tx)?;
            tx.send(Message::Stop)
        });

        match generation_result {
            Ok(_) => log::info!("image fully generated"),
            Err(err) => log::error!("image generation interrupted: {}", err),
        };

        output_buffer
    }

    fn line_worker(&self, row: u32) -> LineMsg {
        log::trace!("working on row {row}");
        LineMsg {
            row,
            data: self.renderer.trace_line(row),
        }
    }
}

#[cfg(test)]
mod tests {
    use whitted::{
        camera::Camera,
        color::Rgb,
        config::TraceConfig,
        integrators::WhittedIntegrator,
        renderer::Renderer,
        scene::{examples::SpheresScene, Scene},
    };

    use super::Executor;

    #[test]
    fn both_modes_render_the_same_image() {
        let scene = Scene::from(SpheresScene);
        let executor = Executor {
            renderer: Renderer {
                world: scene.world(),
                camera: Camera::default(),
                config: TraceConfig {
                    soft_shadows: true,
                    ..Default::default()
                },
                integrator: WhittedIntegrator,
                width: 16,
                height: 12,
                seed: 3,
            },
        };

        let multi = executor.run_multithreaded();
        let mono = executor.run_monothreaded();
        assert_eq!(multi.pixels.len(), 16 * 12);
        assert_eq!(multi.pixels, mono.pixels);
        assert!(multi.pixels.iter().any(|c| *c != Rgb::default()));
    }
}
